use crate::settings::Settings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub settings: Settings,
    pub on_change: Callback<Settings>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_theme_cb = {
        let cb = props.on_change.clone();
        let current = props.settings;
        Callback::from(move |_| {
            cb.emit(Settings {
                theme: current.theme.toggled(),
                ..current
            })
        })
    };
    let toggle_sound_cb = {
        let cb = props.on_change.clone();
        let mut next = props.settings;
        next.sound.enabled = !next.sound.enabled;
        Callback::from(move |_| cb.emit(next))
    };
    let volume_cb = {
        let cb = props.on_change.clone();
        let current = props.settings;
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let Ok(percent) = input.value().parse::<f32>() else {
                return;
            };
            let mut next = current;
            next.sound.master_volume = percent / 100.0;
            cb.emit(next);
        })
    };

    let s = props.settings;
    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <button onclick={toggle_theme_cb}>{ format!("Theme: {}", s.theme.css_class()) }</button>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={s.sound.enabled} onclick={toggle_sound_cb} />
                    <span>{"Sound"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px;">
                    <span>{"Volume"}</span>
                    <input type="range" min="0" max="100"
                        value={((s.sound.master_volume * 100.0).round() as u32).to_string()}
                        disabled={!s.sound.enabled}
                        oninput={volume_cb} />
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
        </div>
    </div>}
}
