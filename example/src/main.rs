fn main() -> Result<(), Box<dyn std::error::Error>> {
    example::desktop_main()
}
