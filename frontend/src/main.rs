fn main() {
    assetdesk_frontend::run();
}
