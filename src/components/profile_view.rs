use super::Page;
use crate::model::{GameAction, GameState};
use crate::util::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileViewProps {
    pub game: UseReducerHandle<GameState>,
    pub navigate: Callback<Page>,
}

#[function_component(ProfileView)]
pub fn profile_view(props: &ProfileViewProps) -> Html {
    let back = {
        let cb = props.navigate.clone();
        Callback::from(move |_| cb.emit(Page::Home))
    };
    let disconnect = {
        let game = props.game.clone();
        Callback::from(move |_| game.dispatch(GameAction::DisconnectWallet))
    };

    let player = &props.game.player;
    let wallet = &props.game.wallet;
    let stat = |label: &str, value: String| {
        html! {
            <div style="display:flex; justify-content:space-between; padding:4px 0; border-bottom:1px solid #30363d;">
                <span style="opacity:0.8;">{ label.to_string() }</span>
                <span style="font-weight:600; font-variant-numeric:tabular-nums;">{ value }</span>
            </div>
        }
    };

    html! {
        <div style="padding:16px; display:flex; flex-direction:column; gap:12px; max-width:520px; margin:0 auto;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0;">{ player.name.clone() }</h2>
                <button onclick={back}>{"Back"}</button>
            </div>
            <div>
                <div style="display:flex; justify-content:space-between; font-size:13px;">
                    <span>{ format!("Level {}", player.level) }</span>
                    <span>{ format!("{} XP to level {}", format_number(player.xp_to_next_level()), player.level + 1) }</span>
                </div>
                <div style="height:8px; background:#30363d; border-radius:4px; overflow:hidden;">
                    <div style={format!("height:100%; width:{:.1}%; background:#1f6feb;", player.level_progress_percent())}></div>
                </div>
            </div>
            { stat("High score", format_number(player.high_score)) }
            { stat("Total distance", format!("{}m", format_number(player.total_distance))) }
            { stat("Games played", format_number(player.games_played)) }
            { stat("Experience", format_number(player.experience)) }
            { stat("Coins", format_number(player.coins)) }
            { stat("Diamonds", format_number(player.diamonds)) }
            { stat("Achievements", player.achievements.len().to_string()) }
            if wallet.is_connected {
                <div style="display:flex; justify-content:space-between; align-items:center; font-size:13px;">
                    <span>{ format!("Wallet {} · {} ETH", wallet.address.as_deref().unwrap_or_default(), wallet.balance) }</span>
                    <button onclick={disconnect}>{"Disconnect"}</button>
                </div>
            } else {
                <div style="font-size:13px; opacity:0.7;">{"No wallet connected"}</div>
            }
        </div>
    }
}
