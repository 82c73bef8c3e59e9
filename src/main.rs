fn main() -> anyhow::Result<()> {
    option_roulette::launch_desktop()
}
