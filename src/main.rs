use anyhow::{bail, Context, Result};
use walkthrough::math::GlMatrix;
use walkthrough::render::{CameraConfig, Key, WalkthroughController};

const USAGE: &str = "usage: walkthrough-demo <keys> [width height]\n\
    keys: w/s forward/back, a/d strafe, [ ] down/up, < > turn";

const DEFAULT_SIZE: (u32, u32) = (500, 500);

fn parse_keys(script: &str) -> Result<Vec<Key>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match Key::from_char(c) {
            Some(key) => Ok(key),
            None => bail!("unknown key '{c}'\n{USAGE}"),
        })
        .collect()
}

fn parse_size(width: Option<String>, height: Option<String>) -> Result<(u32, u32)> {
    match (width, height) {
        (None, None) => Ok(DEFAULT_SIZE),
        (Some(width), Some(height)) => Ok((
            width.parse().with_context(|| format!("invalid width '{width}'"))?,
            height.parse().with_context(|| format!("invalid height '{height}'"))?,
        )),
        _ => bail!("width and height must be given together\n{USAGE}"),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let keys = parse_keys(&args.next().unwrap_or_default())?;
    let (width, height) = parse_size(args.next(), args.next())?;

    let mut controller = WalkthroughController::new(CameraConfig::default());
    controller.resize(width, height);
    for key in keys {
        controller.on_key(key);
    }

    let model = GlMatrix::new();
    let uniforms = controller.uniforms(&model);
    log::info!("uniform block is {} bytes", uniforms.as_bytes().len());

    let camera = controller.camera();
    println!("eye {}", camera.eye);
    println!("view direction {}", camera.view_dir);
    println!("view\n{}", controller.view());
    println!("projection\n{}", controller.projection());

    Ok(())
}
