use super::{
    home_view::HomeView, leaderboard_view::LeaderboardView, profile_view::ProfileView,
    run_view::RunView, session_view::SessionView, settings_modal::SettingsModal,
    shop_view::ShopView, top_up_view::TopUpView, upgrades_view::UpgradesView,
};
use crate::model::{GameAction, GameState, HOME_PAGE};
use crate::settings::{self, Settings};
use crate::util::clog;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Game,
    Upgrades,
    Shop,
    TopUp,
    Leaderboard,
    Profile,
    Login,
}

impl Page {
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => HOME_PAGE,
            Page::Game => "game",
            Page::Upgrades => "upgrade",
            Page::Shop => "shop",
            Page::TopUp => "topup",
            Page::Leaderboard => "leaderboard",
            Page::Profile => "profile",
            Page::Login => "login",
        }
    }

    /// Unknown page ids fall back to the home page.
    pub fn from_id(id: &str) -> Self {
        match id {
            "game" => Page::Game,
            "upgrade" => Page::Upgrades,
            "shop" => Page::Shop,
            "topup" => Page::TopUp,
            "leaderboard" => Page::Leaderboard,
            "profile" => Page::Profile,
            "login" | "signup" => Page::Login,
            _ => Page::Home,
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // The one state owner; every view gets this handle through props.
    let game = use_reducer(GameState::new);
    let prefs = use_state(settings::load);
    let show_settings = use_state(|| false);

    // Persist settings & apply theme
    {
        use_effect_with(*prefs, move |s| {
            settings::save(s);
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                root.set_class_name(s.theme.css_class());
            }
            || ()
        });
    }

    // Log run results
    {
        let game = game.clone();
        use_effect_with(game.player.games_played, move |played| {
            if *played > 0 {
                clog(&format!(
                    "run #{} ended: score {} (best {})",
                    played, game.run.score, game.player.high_score
                ));
            }
            || ()
        });
    }

    let navigate = {
        let game = game.clone();
        Callback::from(move |page: Page| game.dispatch(GameAction::SetPage(page.id().to_string())))
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let update_settings = {
        let prefs = prefs.clone();
        Callback::from(move |s: Settings| prefs.set(s.sanitized()))
    };

    let (g, nav) = (game.clone(), navigate.clone());
    let content = match Page::from_id(&game.ui.current_page) {
        Page::Home => html! {
            <HomeView game={g} navigate={nav} open_settings={open_settings.clone()} />
        },
        Page::Game => html! { <RunView game={g} navigate={nav} sound={prefs.sound} /> },
        Page::Upgrades => html! { <UpgradesView game={g} navigate={nav} /> },
        Page::Shop => html! { <ShopView game={g} navigate={nav} /> },
        Page::TopUp => html! { <TopUpView game={g} navigate={nav} /> },
        Page::Leaderboard => html! { <LeaderboardView game={g} navigate={nav} /> },
        Page::Profile => html! { <ProfileView game={g} navigate={nav} /> },
        Page::Login => html! { <SessionView game={g} navigate={nav} /> },
    };

    html! {
        <div id="root" style="position:relative; min-height:100vh;">
            { content }
            <SettingsModal
                show={*show_settings}
                settings={*prefs}
                on_change={update_settings}
                on_close={close_settings}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_round_trip_and_default_home() {
        for page in [
            Page::Home,
            Page::Game,
            Page::Upgrades,
            Page::Shop,
            Page::TopUp,
            Page::Leaderboard,
            Page::Profile,
            Page::Login,
        ] {
            assert_eq!(Page::from_id(page.id()), page);
        }
        assert_eq!(Page::from_id("signup"), Page::Login);
        assert_eq!(Page::from_id("inventory"), Page::Home);
    }
}
