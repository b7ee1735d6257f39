use yew_sky_runner::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
