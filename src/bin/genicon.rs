use pwa_icon_gen::{IconBuilder, IconSizes, Result, Visual, DEFAULT_OUTPUT_DIR};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let out_dir = Path::new(DEFAULT_OUTPUT_DIR);
    let builder = IconBuilder::default();

    println!("Generating PWA icons...");
    println!("Output directory: {}", out_dir.display());
    println!();

    fs::create_dir_all(out_dir)?;

    for &size in IconSizes::PWA.as_slice() {
        let icon = builder.render(size);
        let path = out_dir.join(icon.file_name());

        println!("Creating {}...", icon.file_name());
        if icon.visual == Visual::Cart {
            println!("  (no usable emoji font, drawing fallback shape)");
        }

        icon.image.save(&path)?;
        println!("  ✓ Saved to {}", path.display());
    }

    println!();
    println!("✅ All icons generated successfully!");
    let shown = fs::canonicalize(out_dir).unwrap_or_else(|_| out_dir.to_path_buf());
    println!("📁 Icons saved to: {}", shown.display());
    Ok(())
}
