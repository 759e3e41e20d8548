use std::env;
use std::process::ExitCode;

use swfparser::metadata::{format_to_string, read_local_info};
use swfparser::{ScanOptions, SwfInfo};

struct Args {
    path: String,
    options: ScanOptions,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut path = None;
    let mut options = ScanOptions::default();
    let mut json = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--json" {
            json = true;
        } else if arg == "--trace" {
            let value = args.next().ok_or("--trace needs a number")?;
            let limit = value
                .parse()
                .map_err(|_| format!("invalid trace limit: {}", value))?;
            options = options.with_trace_limit(limit);
        } else if path.is_none() {
            path = Some(arg);
        } else {
            return Err(format!("unexpected argument: {}", arg));
        }
    }

    Ok(Args {
        path: path.ok_or("missing file argument")?,
        options,
        json,
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Usage: swf_tag_scanner <file.swf> [--trace N] [--json]");
            return ExitCode::from(2);
        }
    };

    let info = match read_local_info(&args.path, &args.options) {
        Ok(info) => info,
        Err(e) => {
            eprintln!("❌ {}: {}", args.path, e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&info) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ JSON encoding failed: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_info(&args.path, &info, args.options.trace_limit);
    }
    ExitCode::SUCCESS
}

fn print_info(path: &str, info: &SwfInfo, trace_limit: usize) {
    let header = &info.header;
    println!("📄 File: {}", path);
    println!("📏 Size: {} bytes", info.size);
    println!();
    println!("Signature: {}", header.signature());
    println!("Version:   {}", header.version);
    println!(
        "Declared size (decompressed): {} bytes",
        header.declared_length
    );
    println!("Type: {}", format_to_string(&header.compression));
    println!();
    println!("Stage:  {} x {} px", header.width_px, header.height_px);
    println!("FPS:    {:.2}", header.frame_rate);
    println!("Frames: {}", header.frame_count);

    let report = match (&info.scan, &info.scan_error) {
        (Some(report), _) => report,
        (None, Some(error)) => {
            println!("\n⚠️  Tag scan failed: {}", error);
            return;
        }
        (None, None) => return,
    };

    println!("\n--- Tag scan (first {}) ---", trace_limit);
    for line in &report.trace {
        println!("{}", line);
    }

    let summary = &report.summary;
    println!();
    println!("Total tags: {}", summary.total_tags);
    println!("ShowFrame tags: {}", summary.frame_marker_tags);
    println!("Sprites: {}", summary.sprite_count);
    println!("Sprite tags: {}", summary.sprite_tags);
    println!("Sprite ShowFrame tags: {}", summary.sprite_frame_marker_tags);
    if summary.has_capabilities_tag {
        println!(
            "FileAttributes: useAs3={}, useNetwork={}, hasMetadata={}",
            if summary.uses_vm2 {
                "YES(AS3/AVM2)"
            } else {
                "NO(AS1/2/AVM1)"
            },
            yes_no(summary.network_requested),
            yes_no(summary.has_metadata)
        );
    } else {
        println!("FileAttributes: (not found)");
    }
    if report.truncated_streams > 0 {
        println!(
            "⚠️  {} stream(s) ended on a truncated record",
            report.truncated_streams
        );
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "NO"
    }
}
