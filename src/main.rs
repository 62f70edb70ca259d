fn main() {
    esp_ui::launch();
}
