use crate::util::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub score: u64,
    pub distance: u64,
    pub coins: u64,
    pub diamonds: u64,
    pub speed: u32,
    pub lives: u32,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let row = |icon: &str, label: &str, value: String, color: &str| {
        html! {
            <div style={row_style}>
                <span style={format!("{} color:{};", icon_style, color)}>{ icon.to_string() }</span>
                <span style={format!("{} color:{};", label_style, color)}>{ label.to_string() }</span>
                <span style={format!("{} color:{};", value_style, color)}>{ value }</span>
            </div>
        }
    };
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            { row("★", "Score", format_number(props.score), "#e6edf3") }
            { row("↦", "Distance", format!("{}m", format_number(props.distance)), "#8b949e") }
            { row("🪙", "Coins", format_number(props.coins), "#d4af37") }
            { row("💎", "Diamonds", format_number(props.diamonds), "#58a6ff") }
            { row("»", "Speed", props.speed.to_string(), "#3fb950") }
            { row("❤", "Lives", props.lives.to_string(), "#f85149") }
        </div>
    }
}
