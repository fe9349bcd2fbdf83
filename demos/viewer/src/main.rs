fn main() -> anyhow::Result<()> {
    menagerie::flow::run()
}
