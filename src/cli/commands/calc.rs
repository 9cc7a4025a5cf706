use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration::track_duration;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::formatting::secs2readable;
use crate::utils::time::{clock_to_seconds, seconds_to_display};

fn print_help_calc_command() {
    eprintln!("Usage:");
    eprintln!("  djsetcalc calc <START> <END>");
    eprintln!("  djsetcalc calc --in-min <M> --in-sec <S> --out-min <M> --out-sec <S>\n");
    eprintln!("Arguments:");
    eprintln!("  START       Track start time (MM:SS or HH:MM:SS)");
    eprintln!("  END         Track end time (MM:SS or HH:MM:SS)\n");
    eprintln!("Examples:");
    eprintln!("  djsetcalc calc 00:10 00:40");
    eprintln!("  djsetcalc calc 23:50 00:10");
    eprintln!("  djsetcalc calc --in-min 3 --in-sec 20 --out-min 7 --out-sec 5\n");
}

/// Compute one track duration, stateless.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        start,
        end,
        in_min,
        in_sec,
        out_min,
        out_sec,
        json,
    } = cmd
    {
        let mode = cfg.display_mode()?;

        //
        // 1. Merge the numeric variant into formatted strings.
        //    The 0-59 bounds are already enforced by the argument parser.
        //
        let (start_str, end_str) = if let (Some(im), Some(is_), Some(om), Some(os)) =
            (in_min, in_sec, out_min, out_sec)
        {
            (format!("{:02}:{:02}", im, is_), format!("{:02}:{:02}", om, os))
        } else if let (Some(s), Some(e)) = (start, end) {
            (s.clone(), e.clone())
        } else {
            eprintln!("❌ Missing start/end times\n");
            print_help_calc_command();
            return Ok(());
        };

        //
        // 2. Parse both times
        //
        let start_secs = clock_to_seconds(&start_str)?;
        let end_secs = clock_to_seconds(&end_str)?;

        //
        // 3. Compute and render
        //
        let secs = track_duration(start_secs, end_secs);
        let formatted = seconds_to_display(secs, mode);

        if *json {
            let payload = serde_json::json!({
                "start": start_str,
                "end": end_str,
                "duration_seconds": secs,
                "duration": formatted,
            });
            let rendered = serde_json::to_string_pretty(&payload)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", rendered);
        } else {
            messages::success(format!(
                "Duration: {} ({})",
                formatted,
                secs2readable(secs)
            ));
        }
    }

    Ok(())
}
