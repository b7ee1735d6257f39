use super::Page;
use crate::model::{GameAction, GameState};
use crate::session::{SessionError, new_player, random_suffix, returning_player};
use crate::util::{clog, now_ms};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SessionViewProps {
    pub game: UseReducerHandle<GameState>,
    pub navigate: Callback<Page>,
}

fn text_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

/// Log in with an email or sign up with a display name. Both only seed the
/// local profile.
#[function_component(SessionView)]
pub fn session_view(props: &SessionViewProps) -> Html {
    let email = use_state(String::new);
    let name = use_state(String::new);
    let error = use_state(|| None::<String>);

    let finish = {
        let game = props.game.clone();
        let navigate = props.navigate.clone();
        let error = error.clone();
        Callback::from(move |result: Result<GameAction, SessionError>| match result {
            Ok(action) => {
                game.dispatch(action);
                clog("session: profile ready");
                error.set(None);
                navigate.emit(Page::Home);
            }
            Err(err) => error.set(Some(err.to_string())),
        })
    };
    let log_in = {
        let email = email.clone();
        let finish = finish.clone();
        Callback::from(move |_: MouseEvent| {
            let suffix = random_suffix(js_sys::Math::random());
            finish.emit(returning_player(&email, now_ms(), &suffix));
        })
    };
    let sign_up = {
        let name = name.clone();
        Callback::from(move |_: MouseEvent| {
            let suffix = random_suffix(js_sys::Math::random());
            finish.emit(new_player(&name, now_ms(), &suffix));
        })
    };
    let back = {
        let cb = props.navigate.clone();
        Callback::from(move |_| cb.emit(Page::Home))
    };

    let section = "background:#161b22; border:1px solid #30363d; border-radius:8px; padding:12px 14px; display:flex; flex-direction:column; gap:8px;";
    html! {
        <div style="padding:16px; display:flex; flex-direction:column; gap:12px; max-width:420px; margin:0 auto;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0;">{"Account"}</h2>
                <button onclick={back}>{"Back"}</button>
            </div>
            <div style={section}>
                <strong>{"Log in"}</strong>
                <input type="email" placeholder="you@example.com" value={(*email).clone()} oninput={text_input(&email)} />
                <button onclick={log_in}>{"Log in"}</button>
            </div>
            <div style={section}>
                <strong>{"Sign up"}</strong>
                <input type="text" placeholder="Display name" value={(*name).clone()} oninput={text_input(&name)} />
                <button onclick={sign_up}>{"Create profile"}</button>
            </div>
            if let Some(msg) = (*error).clone() {
                <div style="color:#f85149; font-size:13px;">{ msg }</div>
            }
        </div>
    }
}
