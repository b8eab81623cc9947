use crate::config::Config;
use crate::terminal::paint;
use anyhow::Result;
use clap::Args;
use faceplate_editor::{AttributeMap, PreviewRenderer};
use faceplate_literal::format_error;

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Face as a property list, e.g. "(:weight bold :foreground \"red\")"
    pub face: String,
}

pub fn preview(args: PreviewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let face = match faceplate_literal::parse(&args.face) {
        Ok(value) => AttributeMap::try_from(value)?,
        Err(err) => {
            eprint!("{}", format_error(&args.face, "face", &err));
            return Err(err.into());
        }
    };

    let sample = PreviewRenderer::new(config.baseline_style.clone()).render(&face);
    println!("{}{}", paint(&sample, &config.baseline_style), face);

    Ok(())
}
