use super::Page;
use crate::model::GameState;
use crate::shop::{ShopCategory, ShopItem, items_in};
use crate::upgrades::{can_afford, purchase_item_actions};
use crate::util::{clog, cwarn, format_number};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShopViewProps {
    pub game: UseReducerHandle<GameState>,
    pub navigate: Callback<Page>,
}

#[function_component(ShopView)]
pub fn shop_view(props: &ShopViewProps) -> Html {
    let category = use_state(|| ShopCategory::PowerUps);
    let notice = use_state(|| None::<String>);

    let buy = {
        let game = props.game.clone();
        let notice = notice.clone();
        Callback::from(move |item: &'static ShopItem| {
            match purchase_item_actions(&game, item.price) {
                Ok(actions) => {
                    for action in actions {
                        game.dispatch(action);
                    }
                    clog(&format!("shop: bought {}", item.id));
                    notice.set(Some(format!("Purchased {}", item.name)));
                }
                Err(err) => {
                    cwarn(&format!("shop {}: {err}", item.id));
                    notice.set(Some(err.to_string()));
                }
            }
        })
    };
    let back = {
        let cb = props.navigate.clone();
        Callback::from(move |_| cb.emit(Page::Home))
    };

    let player = &props.game.player;
    let tabs = ShopCategory::ALL.iter().map(|&c| {
        let select = {
            let category = category.clone();
            Callback::from(move |_: MouseEvent| category.set(c))
        };
        let weight = if *category == c { "700" } else { "400" };
        html! {
            <button onclick={select} style={format!("font-weight:{weight};")}>{ c.label() }</button>
        }
    });
    let cards = items_in(*category).map(|item| {
        let on_buy = {
            let buy = buy.clone();
            Callback::from(move |_: MouseEvent| buy.emit(item))
        };
        html! {
            <div style="background:#161b22; border:1px solid #30363d; border-radius:8px; padding:12px 14px; display:flex; flex-direction:column; gap:6px;">
                <strong style={format!("color:{};", item.rarity.color())}>{ item.name }</strong>
                <span style="font-size:12px; opacity:0.8;">{ item.description }</span>
                <button onclick={on_buy} disabled={!can_afford(player, item.price)}>
                    { format!("Buy · {} {}", format_number(item.price.amount), item.price.currency) }
                </button>
            </div>
        }
    });

    html! {
        <div style="padding:16px; display:flex; flex-direction:column; gap:12px; max-width:720px; margin:0 auto;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0;">{"Shop"}</h2>
                <button onclick={back}>{"Back"}</button>
            </div>
            <div style="display:flex; gap:16px; font-size:14px;">
                <span style="color:#d4af37;">{ format!("🪙 {}", format_number(player.coins)) }</span>
                <span style="color:#58a6ff;">{ format!("💎 {}", format_number(player.diamonds)) }</span>
            </div>
            <div style="display:flex; gap:8px;">{ for tabs }</div>
            if let Some(msg) = (*notice).clone() {
                <div style="font-size:13px;">{ msg }</div>
            }
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(210px, 1fr)); gap:10px;">
                { for cards }
            </div>
        </div>
    }
}
