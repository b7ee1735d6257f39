use super::Page;
use crate::model::{GameAction, GameState};
use crate::session::guest_session;
use crate::util::{format_number, now_ms};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomeViewProps {
    pub game: UseReducerHandle<GameState>,
    pub navigate: Callback<Page>,
    pub open_settings: Callback<()>,
}

#[function_component]
pub fn HomeView(props: &HomeViewProps) -> Html {
    let go = |page: Page| {
        let cb = props.navigate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(page))
    };
    let play_as_guest = {
        let game = props.game.clone();
        let navigate = props.navigate.clone();
        Callback::from(move |_| {
            game.dispatch(guest_session(now_ms()));
            navigate.emit(Page::Game);
        })
    };
    let settings_btn = {
        let cb = props.open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let disconnect = {
        let game = props.game.clone();
        Callback::from(move |_| game.dispatch(GameAction::DisconnectWallet))
    };

    let player = &props.game.player;
    let wallet = &props.game.wallet;
    let has_profile = !player.id.is_empty();

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:16px; padding:32px;">
            <h1 style="margin:0;">{"Sky Runner"}</h1>
            <p style="margin:0; opacity:0.8;">
                { format!("{} · best {} · {} coins · {} diamonds",
                    player.name,
                    format_number(player.high_score),
                    format_number(player.coins),
                    format_number(player.diamonds)) }
            </p>
            <div style="display:flex; gap:12px; flex-wrap:wrap; justify-content:center;">
                if has_profile {
                    <button onclick={go(Page::Game)}>{"Play"}</button>
                } else {
                    <button onclick={play_as_guest}>{"Play as Guest"}</button>
                    <button onclick={go(Page::Login)}>{"Log in / Sign up"}</button>
                }
                <button onclick={go(Page::Upgrades)}>{"Upgrades"}</button>
                <button onclick={go(Page::Shop)}>{"Shop"}</button>
                <button onclick={go(Page::TopUp)}>{"Top Up"}</button>
                <button onclick={go(Page::Leaderboard)}>{"Leaderboard"}</button>
                <button onclick={go(Page::Profile)}>{"Profile"}</button>
                <button onclick={settings_btn}>{"Settings"}</button>
            </div>
            if wallet.is_connected {
                <div style="display:flex; gap:8px; align-items:center; font-size:13px;">
                    <span>{ format!("{} · {} ETH", wallet.address.as_deref().unwrap_or_default(), wallet.balance) }</span>
                    <button onclick={disconnect}>{"Disconnect"}</button>
                </div>
            }
        </div>
    }
}
