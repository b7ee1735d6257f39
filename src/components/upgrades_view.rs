use super::Page;
use crate::model::{GameState, Skill};
use crate::upgrades::{
    DOUBLE_JUMP_COST, UPGRADE_DEFS, can_afford, next_cost, purchase_upgrade_actions,
    total_upgrade_points,
};
use crate::util::{cwarn, format_number};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UpgradesViewProps {
    pub game: UseReducerHandle<GameState>,
    pub navigate: Callback<Page>,
}

#[function_component(UpgradesView)]
pub fn upgrades_view(props: &UpgradesViewProps) -> Html {
    let notice = use_state(|| None::<String>);

    let purchase = {
        let game = props.game.clone();
        let notice = notice.clone();
        Callback::from(move |skill: Skill| match purchase_upgrade_actions(&game, skill) {
            Ok(actions) => {
                for action in actions {
                    game.dispatch(action);
                }
                notice.set(None);
            }
            Err(err) => {
                cwarn(&format!("upgrade {skill}: {err}"));
                notice.set(Some(err.to_string()));
            }
        })
    };
    let back = {
        let cb = props.navigate.clone();
        Callback::from(move |_| cb.emit(Page::Home))
    };

    // Snapshot
    let game = &props.game;
    let player = &game.player;
    let levels = &game.upgrades;

    let card_style = "background:#161b22; border:1px solid #30363d; border-radius:8px; padding:12px 14px; display:flex; flex-direction:column; gap:6px;";
    let cards = UPGRADE_DEFS.iter().map(|def| {
        let level = levels.level(def.skill);
        let cost = next_cost(levels, def.skill);
        let affordable = cost.is_some_and(|c| can_afford(player, c));
        let buy = {
            let purchase = purchase.clone();
            let skill = def.skill;
            Callback::from(move |_: MouseEvent| purchase.emit(skill))
        };
        html! {
            <div style={card_style}>
                <div style="display:flex; justify-content:space-between;">
                    <strong>{ def.name }</strong>
                    <span>{ format!("Lv {} / {}", level, def.max_level) }</span>
                </div>
                <span style="font-size:12px; opacity:0.8;">{ def.description }</span>
                <span style="font-size:12px; color:#3fb950;">{ def.effect }</span>
                {
                    match cost {
                        Some(c) => html! {
                            <button onclick={buy} disabled={!affordable}>
                                { format!("Upgrade · {} {}", format_number(c.amount), c.currency) }
                            </button>
                        },
                        None => html! { <span style="color:#d4af37;">{"Maxed"}</span> },
                    }
                }
            </div>
        }
    });

    let double_jump = {
        let purchase = purchase.clone();
        Callback::from(move |_| purchase.emit(Skill::DoubleJump))
    };

    html! {
        <div style="padding:16px; display:flex; flex-direction:column; gap:12px; max-width:720px; margin:0 auto;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0;">{"Upgrades"}</h2>
                <button onclick={back}>{"Back"}</button>
            </div>
            <div style="display:flex; gap:16px; font-size:14px;">
                <span style="color:#d4af37;">{ format!("🪙 {}", format_number(player.coins)) }</span>
                <span style="color:#58a6ff;">{ format!("💎 {}", format_number(player.diamonds)) }</span>
                <span>{ format!("Upgrade points: {}", total_upgrade_points(levels)) }</span>
            </div>
            if let Some(msg) = (*notice).clone() {
                <div style="color:#f85149; font-size:13px;">{ msg }</div>
            }
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(210px, 1fr)); gap:10px;">
                { for cards }
                <div style={card_style}>
                    <strong>{"Double Jump"}</strong>
                    <span style="font-size:12px; opacity:0.8;">{"Jump a second time in mid-air"}</span>
                    if levels.double_jump_unlocked {
                        <span style="color:#3fb950;">{"Unlocked"}</span>
                    } else {
                        <button onclick={double_jump} disabled={!can_afford(player, DOUBLE_JUMP_COST)}>
                            { format!("Unlock · {} {}", DOUBLE_JUMP_COST.amount, DOUBLE_JUMP_COST.currency) }
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}
