fn main() -> anyhow::Result<()> {
    i2loc::cli::run_cli()
}
