use super::Page;
use crate::model::GameState;
use crate::util::{clog, cwarn, format_number};
use crate::wallet::{
    COINS_PER_UNIT, DIAMONDS_PER_UNIT, PACK_UNITS, TopUpKind, credit_purchase, format_ether,
    link_action, quote,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TopUpViewProps {
    pub game: UseReducerHandle<GameState>,
    pub navigate: Callback<Page>,
}

/// Wallet linking and currency packs. Payment itself happens in the wallet;
/// this page only records the credit once a pack is bought.
#[function_component(TopUpView)]
pub fn top_up_view(props: &TopUpViewProps) -> Html {
    let address = use_state(String::new);
    let notice = use_state(|| None::<String>);

    let on_address = {
        let address = address.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                address.set(input.value());
            }
        })
    };
    let link = {
        let game = props.game.clone();
        let address = address.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| match link_action(&address, 0) {
            Ok(action) => {
                game.dispatch(action);
                notice.set(None);
            }
            Err(err) => notice.set(Some(err.to_string())),
        })
    };
    let buy = {
        let game = props.game.clone();
        let notice = notice.clone();
        Callback::from(move |(kind, units): (TopUpKind, u64)| {
            match credit_purchase(&game, kind, units) {
                Ok(action) => {
                    clog(&format!("top-up: {units} {kind:?} units credited"));
                    game.dispatch(action);
                    notice.set(Some("Purchase credited".to_string()));
                }
                Err(err) => {
                    cwarn(&format!("top-up: {err}"));
                    notice.set(Some(err.to_string()));
                }
            }
        })
    };
    let back = {
        let cb = props.navigate.clone();
        Callback::from(move |_| cb.emit(Page::Home))
    };

    let wallet = &props.game.wallet;
    let player = &props.game.player;
    let pack = |kind: TopUpKind, units: u64| {
        let (amount, label) = match kind {
            TopUpKind::Coins => (units.saturating_mul(COINS_PER_UNIT), "coins"),
            TopUpKind::Diamonds => (units.saturating_mul(DIAMONDS_PER_UNIT), "diamonds"),
        };
        let price = quote(kind, units)
            .map(|wei| format!("{} ETH", format_ether(wei)))
            .unwrap_or_else(|err| err.to_string());
        let on_buy = {
            let buy = buy.clone();
            Callback::from(move |_: MouseEvent| buy.emit((kind, units)))
        };
        html! {
            <div style="background:#161b22; border:1px solid #30363d; border-radius:8px; padding:12px 14px; display:flex; flex-direction:column; gap:6px;">
                <strong>{ format!("{} {}", format_number(amount), label) }</strong>
                <span style="font-size:12px; opacity:0.8;">{ price }</span>
                <button onclick={on_buy} disabled={!wallet.is_connected}>{"Buy"}</button>
            </div>
        }
    };
    let coin_packs = PACK_UNITS.iter().map(|&u| pack(TopUpKind::Coins, u));
    let diamond_packs = PACK_UNITS.iter().map(|&u| pack(TopUpKind::Diamonds, u));

    html! {
        <div style="padding:16px; display:flex; flex-direction:column; gap:12px; max-width:720px; margin:0 auto;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0;">{"Top Up"}</h2>
                <button onclick={back}>{"Back"}</button>
            </div>
            <div style="display:flex; gap:16px; font-size:14px;">
                <span style="color:#d4af37;">{ format!("🪙 {}", format_number(player.coins)) }</span>
                <span style="color:#58a6ff;">{ format!("💎 {}", format_number(player.diamonds)) }</span>
            </div>
            if wallet.is_connected {
                <div style="font-size:13px;">
                    { format!("Wallet {} · {} ETH", wallet.address.as_deref().unwrap_or_default(), wallet.balance) }
                </div>
            } else {
                <div style="display:flex; gap:8px; align-items:center;">
                    <input type="text" placeholder="0x…" value={(*address).clone()} oninput={on_address} style="flex:1;" />
                    <button onclick={link}>{"Link wallet"}</button>
                </div>
            }
            if let Some(msg) = (*notice).clone() {
                <div style="font-size:13px;">{ msg }</div>
            }
            <h3 style="margin:0;">{"Coins"}</h3>
            <div style="display:grid; grid-template-columns:repeat(3, 1fr); gap:10px;">{ for coin_packs }</div>
            <h3 style="margin:0;">{"Diamonds"}</h3>
            <div style="display:grid; grid-template-columns:repeat(3, 1fr); gap:10px;">{ for diamond_packs }</div>
        </div>
    }
}
