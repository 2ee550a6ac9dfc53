// battery-gauge entry point
//
// Boot: logger -> hardware -> blank the OLED -> one measure/render pass.
// With the default calibration the pass runs once and the firmware parks
// with the reading on screen until power is removed; the
// `periodic-refresh` feature re-runs the pass every minute instead.
//
// Nothing is retried. Hardware errors are logged and the firmware carries
// on to the halt (or the next period).

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::delay::Delay;
use log::{error, info, warn};

use battery_gauge::board::{self, Board};
use gauge_monitor::BatteryMonitor;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let peripherals = esp_hal::init(esp_hal::Config::default());

    info!("booting...");

    let mut board = match Board::init(peripherals) {
        Ok(board) => board,
        Err(e) => {
            error!("board init failed: {:?}", e);
            halt();
        }
    };
    if let Err(e) = board::init_oled(&mut board.oled) {
        // keep going; whatever the panel does with the frame is all we have
        warn!("display init failed: {:?}", e);
    }
    info!("hardware initialized.");

    let mut monitor = match BatteryMonitor::new(
        board.battery,
        board.mode_switch,
        Delay::new(),
        board.oled,
        board::CALIBRATION,
    ) {
        Ok(monitor) => monitor,
        Err(e) => {
            error!("monitor setup failed: {}", e);
            halt();
        }
    };

    if let Err(e) = monitor.blank() {
        warn!("display clear failed: {}", e);
    }

    loop {
        match monitor.run_pass() {
            Ok(reading) => info!(
                "battery: {} {:.2} V ({:.0}%)",
                reading.mode, reading.battery_volts, reading.charge_percent
            ),
            Err(e) => error!("pass failed: {}", e),
        }

        if !monitor.wait_for_next_pass() {
            break;
        }
    }

    info!("halted.");
    halt()
}

fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
