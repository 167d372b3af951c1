//! Rotating sphere of technology icons.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::*;
use web_sys::MouseEvent;

use crate::cloud::{CloudConfig, Drive, IconCloud};
use crate::config::CLOUD_FRAME_MS;

#[component]
pub fn IconSphere(icons: Vec<&'static str>) -> impl IntoView {
    let config = CloudConfig::default();
    let cloud = Rc::new(RefCell::new(IconCloud::new(icons.len(), config)));
    let projections = create_rw_signal(cloud.borrow().projections());
    let drive = Rc::new(Cell::new(Drive::Idle));
    let container = create_node_ref::<html::Div>();

    let interval = {
        let drive = drive.clone();
        Interval::new(CLOUD_FRAME_MS, move || {
            let next = cloud.borrow_mut().tick(drive.get());
            let _ = projections.try_set(next);
        })
    };
    on_cleanup(move || drop(interval));

    let on_move = {
        let drive = drive.clone();
        move |ev: MouseEvent| {
            let Some(el) = container.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let half_w = rect.width() / 2.0;
            let half_h = rect.height() / 2.0;
            if half_w <= 0.0 || half_h <= 0.0 {
                return;
            }
            let dx = (f64::from(ev.client_x()) - rect.left() - half_w) / half_w;
            let dy = (f64::from(ev.client_y()) - rect.top() - half_h) / half_h;
            drive.set(Drive::Pointer {
                dx: dx as f32,
                dy: dy as f32,
            });
        }
    };
    let on_leave = move |_: MouseEvent| drive.set(Drive::Idle);

    let size = (config.radius * 2.0 + 64.0).round() as u32;

    view! {
        <div
            class="icon-cloud"
            node_ref=container
            style=format!("width: {0}px; height: {0}px;", size)
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            {icons
                .into_iter()
                .enumerate()
                .map(|(i, icon)| {
                    let style = move || {
                        projections.with(|p| p.get(i).map(|p| p.css()).unwrap_or_default())
                    };
                    view! { <span class="cloud-icon" style=style>{icon}</span> }
                })
                .collect_view()}
        </div>
    }
}
