fn main() {
    dialtone::config::load_dotenv();
    dioxus::launch(dialtone::ui::App);
}
