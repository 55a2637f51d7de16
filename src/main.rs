use clap::Parser;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fixed_window::{BufferError, DynWindowBuffer, HasWindow};

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "Walks through a window buffer: fills it, adds values past its capacity and prints what it retains, newest first"
)]
struct Args {
    /// Number of elements the window retains
    #[arg(long, value_name = "NUM", default_value_t = 3)]
    capacity: usize,

    /// Values to add, in order
    #[arg(long, value_name = "NUM", num_args = 1.., default_values_t = [1, 2, 3, 4])]
    values: Vec<u32>,
}

fn main() -> Result<(), BufferError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    info!("Allocating window buffer for {} elements", args.capacity);
    let mut buf = DynWindowBuffer::<u32>::new(args.capacity)?;
    buf.fill(0);
    info!("buf.size() == {}", buf.size());

    for value in &args.values {
        if buf.is_full() {
            info!("Adding {value}, the oldest element is overwritten");
        } else {
            info!("Adding {value}");
        }
        buf.add(*value);
    }

    info!("buf.size() == {}", buf.size());
    if let Some(latest) = buf.latest() {
        info!("buf.at(0) == {latest}");
    }

    let contents: Vec<String> = buf.iter().map(|v| v.to_string()).collect();
    println!("Buffer contents: {}", contents.join(", "));
    Ok(())
}
