use crate::util::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u64,
    pub distance: u64,
    pub coins: u64,
    pub diamonds: u64,
    pub new_best: bool,
    pub restart: Callback<()>,
    pub to_home: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    let home_btn = {
        let cb = props.to_home.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{"Game Over"}</h2>
            if props.new_best {
                <p style="margin:4px 0; color:#d4af37; font-weight:600;">{"New high score!"}</p>
            }
            <p style="margin:4px 0;">{ format!("Score: {}", format_number(props.score)) }</p>
            <p style="margin:4px 0;">{ format!("Distance: {}m", format_number(props.distance)) }</p>
            <p style="margin:4px 0;">{ format!("Coins: {}", format_number(props.coins)) }</p>
            <p style="margin:4px 0;">{ format!("Diamonds: {}", format_number(props.diamonds)) }</p>
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={restart_btn}>{"Run Again"}</button>
                <button onclick={home_btn}>{"Home"}</button>
            </div>
        </div>
    }
}
