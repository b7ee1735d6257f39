use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{Page, game_over_overlay::GameOverOverlay, stats_panel::StatsPanel};
use crate::input::{
    Intent, accepts, collision_action, intent_action, intent_for_key, suppresses_default,
};
use crate::model::{GameAction, GameState, PlayerProfile};
use crate::settings::SoundSettings;
use crate::sound::{SoundBoard, SoundCue, cue_for};
use crate::state::{JUMP_MS, LANES, PlayerPose, touched};
use crate::store::{SCORE_TICK_MS, SCORE_TICK_POINTS};
use crate::util::cwarn;

#[derive(Properties, PartialEq, Clone)]
pub struct RunViewProps {
    pub game: UseReducerHandle<GameState>,
    pub navigate: Callback<Page>,
    pub sound: SoundSettings,
}

fn schedule_landing(pose: Rc<RefCell<PlayerPose>>, on_land: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let land = Closure::once_into_js(move || {
        pose.borrow_mut().land();
        on_land();
    });
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(land.unchecked_ref(), JUMP_MS as i32)
        .is_err()
    {
        cwarn("run view: jump timer failed to start");
    }
}

#[function_component(RunView)]
pub fn run_view(props: &RunViewProps) -> Html {
    let pose = use_mut_ref(PlayerPose::default);
    let redraw = use_force_update();
    let started_here = use_state(|| false);
    // Profile as it was when this run started
    let profile_at_start = use_mut_ref(PlayerProfile::default);
    let board = use_mut_ref(SoundBoard::default);
    // Latest handle and settings for listeners registered once.
    let game_ref = use_mut_ref(|| props.game.clone());
    *game_ref.borrow_mut() = props.game.clone();
    let sound_ref = use_mut_ref(|| props.sound);
    *sound_ref.borrow_mut() = props.sound;

    {
        // Keyboard input
        let game_ref = game_ref.clone();
        let sound_ref = sound_ref.clone();
        let board = board.clone();
        let pose = pose.clone();
        let redraw = redraw.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                let key = e.key();
                let game = game_ref.borrow().clone();
                if suppresses_default(&game, &key) {
                    e.prevent_default();
                }
                let Some(intent) = intent_for_key(&key) else {
                    return;
                };
                if !accepts(&game, intent) {
                    return;
                }
                if let Some(action) = intent_action(&game, intent) {
                    game.dispatch(action);
                    return;
                }
                if pose.borrow_mut().apply(intent) {
                    if intent == Intent::Jump {
                        board.borrow_mut().play(SoundCue::Jump, *sound_ref.borrow());
                    }
                    let redraw = redraw.clone();
                    schedule_landing(pose.clone(), move || redraw.force_update());
                }
                redraw.force_update();
            }) as Box<dyn FnMut(_)>);
            if let Some(w) = &window {
                if w
                    .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                    .is_err()
                {
                    cwarn("run view: keydown listener not attached");
                }
            }
            move || {
                if let Some(w) = window {
                    let _ = w.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(key_cb);
            }
        });
    }

    {
        // Score ticker, only while running and unpaused
        let game_ref = game_ref.clone();
        let running = props.game.run.is_active && !props.game.ui.is_paused;
        use_effect_with(running, move |running| {
            let mut ticker = None;
            if *running {
                if let Some(window) = web_sys::window() {
                    let tick = Closure::wrap(Box::new(move || {
                        let game = game_ref.borrow().clone();
                        let next = game.run.score.saturating_add(SCORE_TICK_POINTS);
                        game.dispatch(GameAction::UpdateScore(next));
                    }) as Box<dyn FnMut()>);
                    match window.set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        SCORE_TICK_MS as i32,
                    ) {
                        Ok(id) => ticker = Some((window, id, tick)),
                        Err(_) => cwarn("run view: score ticker failed to start"),
                    }
                }
            }
            move || {
                if let Some((window, id, tick)) = ticker {
                    window.clear_interval_with_handle(id);
                    drop(tick);
                }
            }
        });
    }

    {
        // Pickups at each new distance mark
        let game = props.game.clone();
        let pose = pose.clone();
        let board = board.clone();
        let sound = props.sound;
        use_effect_with(props.game.run.distance(), move |distance| {
            if game.run.is_active && !game.ui.is_paused {
                for pickup in touched(*distance, &pose.borrow()) {
                    board.borrow_mut().play(cue_for(pickup), sound);
                    if let Some(action) = collision_action(pickup) {
                        game.dispatch(action);
                    }
                }
            }
            || ()
        });
    }

    let start = {
        let game = props.game.clone();
        let pose = pose.clone();
        let started_here = started_here.clone();
        let profile_at_start = profile_at_start.clone();
        let board = board.clone();
        let sound = props.sound;
        Callback::from(move |_: ()| {
            *pose.borrow_mut() = PlayerPose::default();
            *profile_at_start.borrow_mut() = game.player.clone();
            board.borrow_mut().play(SoundCue::Button, sound);
            started_here.set(true);
            game.dispatch(GameAction::StartRun);
        })
    };
    let start_btn = {
        let start = start.clone();
        Callback::from(move |_| start.emit(()))
    };
    let toggle_pause = {
        let game = props.game.clone();
        Callback::from(move |_| {
            let action = if game.ui.is_paused {
                GameAction::ResumeRun
            } else {
                GameAction::PauseRun
            };
            game.dispatch(action);
        })
    };
    let to_home = {
        let game = props.game.clone();
        let navigate = props.navigate.clone();
        Callback::from(move |_: ()| {
            if game.run.is_active {
                game.dispatch(GameAction::EndRun);
            }
            navigate.emit(Page::Home);
        })
    };
    let home_btn = {
        let to_home = to_home.clone();
        Callback::from(move |_| to_home.emit(()))
    };

    let game = &props.game;
    let run = &game.run;
    let new_best = profile_at_start.borrow().beats_high_score(run.score);
    let pose_now = *pose.borrow();
    let lanes = LANES.iter().map(|&x| {
        let here = x == pose_now.lane_x;
        let bg = if here { "#1f6feb" } else { "#161b22" };
        html! {
            <div style={format!("width:80px; height:160px; background:{bg}; border:1px solid #30363d; display:flex; align-items:flex-end; justify-content:center; padding-bottom:12px;")}>
                if here {
                    <span style="font-size:28px;">{ if pose_now.jumping { "🦘" } else { "🏃" } }</span>
                }
            </div>
        }
    });

    html! {
        <div style="position:relative; width:100vw; height:100vh;">
            <StatsPanel
                score={run.score}
                distance={run.distance()}
                coins={run.coins_this_run}
                diamonds={run.diamonds_this_run}
                speed={run.speed}
                lives={run.lives}
            />
            <div style="position:absolute; bottom:80px; left:50%; transform:translateX(-50%); display:flex; gap:4px;">
                { for lanes }
            </div>
            if run.is_active && game.ui.is_paused {
                <div style="position:absolute; top:40%; width:100%; text-align:center; font-size:32px;">{"Paused"}</div>
            }
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:8px;">
                if run.is_active {
                    <button onclick={toggle_pause}>{ if game.ui.is_paused { "Resume" } else { "Pause" } }</button>
                } else if !*started_here {
                    <button onclick={start_btn}>{"Start Run"}</button>
                }
                <button onclick={home_btn}>{"Home"}</button>
            </div>
            <GameOverOverlay
                show={*started_here && !run.is_active}
                score={run.score}
                distance={run.distance()}
                coins={run.coins_this_run}
                diamonds={run.diamonds_this_run}
                new_best={new_best}
                restart={start}
                to_home={to_home}
            />
        </div>
    }
}
