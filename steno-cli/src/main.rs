use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::sync_channel;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use steno_config::{Config, CustomKeyZone, OutputKind};
use steno_core::{Command, Controller, Lookup, Stroke};
use steno_geminipr::{LayoutAliases, SerialMachine, ZoneKey};
use steno_output::StdoutController;
#[cfg(feature = "enigo")]
use steno_output::EnigoController;
use steno_translator::Translator;

const CHANNEL_CAPACITY: usize = 64;

/// Real-time stenography translation engine: reads Gemini PR strokes from a serial
/// device, translates them against a dictionary, and types the result.
#[derive(Parser)]
#[command(name = "steno")]
struct Args {
    /// Path to the TOML configuration file.
    config: PathBuf,

    /// List available serial ports and exit.
    #[arg(long)]
    list_ports: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.list_ports {
        list_ports();
        return;
    }

    if let Err(e) = run(&args.config) {
        log::error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn list_ports() {
    match steno_geminipr::available_ports() {
        Ok(ports) => ports.iter().for_each(|p| println!("{}", p)),
        Err(e) => {
            eprintln!("error listing serial ports: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(config_path: &Path) -> Result<()> {
    let config =
        Config::load(config_path).with_context(|| format!("loading config from {:?}", config_path))?;

    let dict = steno_dictionary::load_dir(&config.dict_dir)
        .with_context(|| format!("loading dictionaries from {:?}", config.dict_dir))?;
    log::info!(
        "loaded {} dictionary entries (outline_cap={})",
        dict.len(),
        dict.outline_cap()
    );

    let aliases = build_aliases(&config)?;
    let machine = SerialMachine::new(
        config.serial_port.clone(),
        config.baud_rate,
        Duration::from_millis(config.timeout_ms),
    );
    log::info!("opening serial port {}", config.serial_port);

    let (stroke_tx, stroke_rx) = sync_channel::<Stroke>(CHANNEL_CAPACITY);
    let (command_tx, command_rx) = sync_channel::<Command>(CHANNEL_CAPACITY);

    // No signal handling is in scope; capture runs until the device disconnects or the reader
    // hits a fatal I/O error, at which point closing `stroke_tx` drains the pipeline below.
    let running = Arc::new(AtomicBool::new(true));

    let reader = thread::spawn(move || {
        if let Err(e) = machine.start_capture(&aliases, &running, |stroke| {
            let _ = stroke_tx.send(stroke);
        }) {
            log::error!("machine capture stopped: {}", e);
        }
    });

    let translator_handle = thread::spawn(move || {
        let mut translator = Translator::new(dict);
        while let Ok(stroke) = stroke_rx.recv() {
            for command in translator.translate(stroke) {
                if command_tx.send(command).is_err() {
                    return;
                }
            }
        }
    });

    let output = config.output;
    let writer = thread::spawn(move || {
        let mut controller = build_controller(output);
        while let Ok(command) = command_rx.recv() {
            controller.dispatch(command);
        }
    });

    reader.join().expect("reader thread panicked");
    translator_handle.join().expect("translator thread panicked");
    writer.join().expect("writer thread panicked");
    Ok(())
}

fn build_aliases(config: &Config) -> Result<LayoutAliases> {
    let overrides = config
        .resolved_custom_keys()
        .context("parsing custom_keys overrides")?
        .into_iter()
        .map(|(name, zone)| (name, zone.map(to_geminipr_zone)))
        .collect();
    Ok(LayoutAliases::with_overrides(overrides))
}

fn to_geminipr_zone(zone: CustomKeyZone) -> ZoneKey {
    match zone {
        CustomKeyZone::Left(c) => ZoneKey::Left(c),
        CustomKeyZone::Vowel(c) => ZoneKey::Vowel(c),
        CustomKeyZone::Right(c) => ZoneKey::Right(c),
    }
}

fn build_controller(output: OutputKind) -> Box<dyn Controller + Send> {
    match output {
        OutputKind::Stdout => Box::new(StdoutController::new()),
        #[cfg(feature = "enigo")]
        OutputKind::Enigo => Box::new(EnigoController::new()),
        #[cfg(not(feature = "enigo"))]
        OutputKind::Enigo => {
            log::warn!(
                "output = \"enigo\" requested but this binary was built without the enigo feature; falling back to stdout"
            );
            Box::new(StdoutController::new())
        }
    }
}
