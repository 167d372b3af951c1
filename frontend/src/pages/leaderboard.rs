use leptos::*;
use leptos_meta::Title;

use super::page_title;
use crate::mock::leaderboard;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    view! {
        <Title text=page_title("Leaderboard")/>
        <section class="section">
            <div class="section-header">
                <h2>"Leaderboard"</h2>
            </div>
            <table class="leaderboard">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Builder"</th>
                        <th>"Points"</th>
                        <th>"Prototypes"</th>
                        <th>"Proposals"</th>
                    </tr>
                </thead>
                <tbody>
                    {leaderboard()
                        .into_iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            let medal = match i {
                                0 => "🥇",
                                1 => "🥈",
                                2 => "🥉",
                                _ => "",
                            };
                            view! {
                                <tr class:podium={i < 3}>
                                    <td>{i + 1} " " {medal}</td>
                                    <td>{entry.name}</td>
                                    <td>{entry.points}</td>
                                    <td>{entry.prototypes}</td>
                                    <td>{entry.proposals}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
