fn main() {
    #[cfg(feature = "cli")]
    featurehash::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("featurehash: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
