use anyhow::Result;

use crate::graphql::sdl;

pub fn handle_schema() -> Result<()> {
    print!("{}", sdl());
    Ok(())
}
