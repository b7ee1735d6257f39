use super::Page;
use crate::leaderboard::{current_player, rank_entries};
use crate::model::GameState;
use crate::util::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardViewProps {
    pub game: UseReducerHandle<GameState>,
    pub navigate: Callback<Page>,
}

fn rank_badge(rank: usize) -> Html {
    let color = match rank {
        1 => "#d4af37",
        2 => "#c0c0c0",
        3 => "#cd7f32",
        _ => "#8b949e",
    };
    html! { <span style={format!("width:32px; font-weight:700; color:{color};")}>{ format!("#{rank}") }</span> }
}

#[function_component(LeaderboardView)]
pub fn leaderboard_view(props: &LeaderboardViewProps) -> Html {
    let back = {
        let cb = props.navigate.clone();
        Callback::from(move |_| cb.emit(Page::Home))
    };

    let table = rank_entries(&props.game.player);
    let me = current_player(&table).cloned();
    let rows = table.iter().map(|e| {
        let bg = if e.is_current_player { "#1f6feb33" } else { "transparent" };
        html! {
            <div style={format!("display:flex; gap:12px; align-items:center; padding:6px 8px; border-bottom:1px solid #30363d; background:{bg};")}>
                { rank_badge(e.rank) }
                <span style="flex:1;">{ e.player_name.clone() }</span>
                <span style="width:90px; text-align:right;">{ format_number(e.score) }</span>
                <span style="width:80px; text-align:right; opacity:0.8;">{ format!("{}m", format_number(e.distance)) }</span>
                <span style="width:80px; text-align:right; color:#d4af37;">{ format_number(e.coins) }</span>
                <span style="width:48px; text-align:right;">{ format!("Lv {}", e.level) }</span>
            </div>
        }
    });

    html! {
        <div style="padding:16px; display:flex; flex-direction:column; gap:12px; max-width:720px; margin:0 auto;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0;">{"Leaderboard"}</h2>
                <button onclick={back}>{"Back"}</button>
            </div>
            if let Some(me) = me {
                <div style="font-size:14px;">
                    { format!("You are #{} with {}", me.rank, format_number(me.score)) }
                </div>
            } else {
                <div style="font-size:14px; opacity:0.7;">{"Finish a run to get on the board"}</div>
            }
            <div style="display:flex; flex-direction:column;">
                { for rows }
            </div>
        </div>
    }
}
