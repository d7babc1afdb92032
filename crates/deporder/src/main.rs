fn main() -> anyhow::Result<()> {
    deporder_lib::main()
}
