//! Command implementations for the SJL CLI.
//!
//! Provides subcommands that write the synthetic springshed tables as CSV
//! and read live sensor data from the remote store.

use clap::Subcommand;

pub mod fetch;
pub mod generate;
pub mod output;

#[derive(Subcommand)]
pub enum Command {
    /// Daily rainfall and spring discharge for one calendar year
    ///
    /// CSV columns: date, rainfall, springDischarge, heavyRain. The heavyRain
    /// column marks the days the generator amplified.
    Series {
        /// Calendar year to simulate (seeds the generator)
        #[arg(short, long)]
        year: i32,

        /// Output path for the CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Random springshed locations by state or mountain range
    Density {
        /// Sample every Indian mountain range instead of states
        #[arg(long)]
        mountains: bool,

        /// Keep only samples in this state/UT
        #[arg(long)]
        state: Option<String>,

        /// Keep only samples in this district (needs --state)
        #[arg(long, requires = "state")]
        district: Option<String>,

        /// RNG seed (current time when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Output path for the CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Active IoT devices vs. springs without a device
    DeviceStats {
        /// Number of devices to draw active ids from
        #[arg(long, default_value_t = sjl_data::devices::DEFAULT_NUM_DEVICES)]
        devices: u32,

        /// Number of springs to draw uncovered ids from
        #[arg(long, default_value_t = sjl_data::devices::DEFAULT_NUM_SPRINGS)]
        springs: u32,

        /// RNG seed (current time when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Output path for the CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Fetch the latest readings for one IoT device
    Fetch {
        /// Device key under the sensor root
        #[arg(short, long, default_value = sjl_core::sensor::DEVICE_IDS[0])]
        device_id: String,

        /// JSON file with {"databaseURL": ..., "authToken": ...}
        #[arg(short, long)]
        config: Option<String>,

        /// Exit with an error when the device has no data
        #[arg(long)]
        require_data: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Series { year, output } => generate::run_series(year, output.as_deref()),
        Command::Density {
            mountains,
            state,
            district,
            seed,
            output,
        } => generate::run_density(
            mountains,
            state.as_deref(),
            district.as_deref(),
            seed,
            output.as_deref(),
        ),
        Command::DeviceStats {
            devices,
            springs,
            seed,
            output,
        } => generate::run_device_stats(devices, springs, seed, output.as_deref()),
        Command::Fetch {
            device_id,
            config,
            require_data,
        } => fetch::run_fetch(&device_id, config.as_deref(), require_data).await,
    }
}
