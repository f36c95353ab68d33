fn main() -> anyhow::Result<()> {
    warranty_tracker_lib::run()
}
