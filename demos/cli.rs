//! Command-line interface for smart_palette
//!
//! Basic CLI tool for extracting palettes from an image and exporting one

use smart_palette::{
    analyze_pixels, image_loader, ExportData, HarmonyKind, PaletteAnalysis, PaletteCategory,
    PaletteExporter, PipelineConfig,
};
use std::{env, fs, path::{Path, PathBuf}, process};

struct Options {
    image_path: String,
    config_path: Option<PathBuf>,
    export_format: Option<String>,
    category: PaletteCategory,
    harmony: Option<HarmonyKind>,
    output: Option<PathBuf>,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    let image_path = Path::new(&options.image_path);
    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    let config = match &options.config_path {
        Some(path) => PipelineConfig::from_json_file(path).unwrap_or_else(|error| fail(error)),
        None => PipelineConfig::default(),
    };

    let buffer = image_loader::load_pixel_buffer(image_path).unwrap_or_else(|error| fail(error));
    let analysis = analyze_pixels(&buffer, &config).unwrap_or_else(|error| fail(error));

    match &options.export_format {
        Some(format) => export(&analysis, &options, format, &config),
        None => print_result(&analysis),
    }
}

fn parse_args(args: &[String]) -> Options {
    let mut image_path = None;
    let mut config_path = None;
    let mut export_format = None;
    let mut category = PaletteCategory::Dominant;
    let mut harmony = None;
    let mut output = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            "--config" => config_path = Some(PathBuf::from(value(args, &mut i))),
            "--export" => export_format = Some(value(args, &mut i)),
            "--output" | "-o" => output = Some(PathBuf::from(value(args, &mut i))),
            "--category" => {
                category = value(args, &mut i).parse().unwrap_or_else(|error| fail(error));
            }
            "--harmony" => {
                harmony = Some(value(args, &mut i).parse().unwrap_or_else(|error| fail(error)));
            }
            arg if !arg.starts_with("--") => {
                if image_path.is_none() {
                    image_path = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(image_path) = image_path else {
        print_help(&args[0]);
        process::exit(1);
    };

    Options {
        image_path,
        config_path,
        export_format,
        category,
        harmony,
        output,
    }
}

fn value(args: &[String], i: &mut usize) -> String {
    *i += 1;
    match args.get(*i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {} requires a value", args[*i - 1]);
            process::exit(1);
        }
    }
}

fn fail(error: smart_palette::PaletteError) -> ! {
    eprintln!("Error: {}", error);
    if error.is_recoverable() {
        eprintln!("Suggestion: {}", error.user_message());
    }
    process::exit(1);
}

fn export(analysis: &PaletteAnalysis, options: &Options, format: &str, config: &PipelineConfig) {
    let mut palette = analysis.palette(options.category);
    if let Some(kind) = options.harmony {
        palette = match palette.harmonized(kind) {
            Some(harmonized) => harmonized,
            None => {
                eprintln!("Error: the {} palette is empty", options.category);
                process::exit(1);
            }
        };
    }

    let exporter = PaletteExporter::with_config(config.export.clone());
    let payload = exporter
        .export_named(&palette, format)
        .unwrap_or_else(|error| fail(error));

    let path = options
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(payload.file_name(&palette.name)));

    match (&payload.data, options.output.is_some()) {
        (ExportData::Text(text), false) => println!("{}", text),
        _ => {
            let mime_type = payload.mime_type();
            let bytes = payload.into_bytes();
            if let Err(e) = fs::write(&path, &bytes) {
                eprintln!("Error: Failed to write {}: {}", path.display(), e);
                process::exit(1);
            }
            eprintln!("Wrote {} ({}, {} bytes)", path.display(), mime_type, bytes.len());
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Extract color palettes from an image file.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE      Load pipeline settings from a JSON file");
    eprintln!("  --export FORMAT    Export one palette, e.g. \"Adobe ASE\" or \"CSS Custom Properties\"");
    eprintln!("  --category NAME    Palette to export: dominant, vibrant, muted, light, dark");
    eprintln!("                     (default: dominant)");
    eprintln!("  --harmony KIND     Export a harmony of the palette's first color instead");
    eprintln!("  --output, -o FILE  Write the export to FILE (binary formats always go to a file)");
    eprintln!("  --help, -h         Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} --export \"GIMP GPL\" --category vibrant photo.png", program_name);
    eprintln!("  {} --export \"Adobe ASE\" --harmony triadic photo.jpg", program_name);
}

fn print_result(analysis: &PaletteAnalysis) {
    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(analysis) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    // Print summary to stderr for human reading
    eprintln!();
    eprintln!("Palette Summary:");
    let top: Vec<&str> = analysis.ranked.iter().take(5).map(|c| c.hex.as_str()).collect();
    eprintln!("  Top colors: {}", top.join(", "));
    for (category, colors) in analysis.palettes.iter() {
        eprintln!("  {:<9} {} colors", category.name(), colors.len());
    }

    if analysis.palettes.non_empty_count() == 0 {
        eprintln!("  Warning: No opaque pixels found. Is the image fully transparent?");
    }
}
