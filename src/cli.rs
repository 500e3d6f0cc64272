// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "cyclist")]
#[command(about = "Animated bicycle-and-rider scene", long_about = None)]
pub struct Cli {
    /// Run without a window for this many frames, then exit
    #[arg(long = "frames", default_value = "0")]
    pub frames: u32,
}
