use crate::error::OctofitResult;
use crate::formatting::{render_home, render_routes};

pub fn handle_home() -> OctofitResult<()> {
    print!("{}", render_home());
    Ok(())
}

pub fn handle_routes() -> OctofitResult<()> {
    print!("{}", render_routes());
    Ok(())
}
