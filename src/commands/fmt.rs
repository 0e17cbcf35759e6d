use anyhow::Result;

use ib2d::schema::render_input2d;

use crate::cli::InputArgs;

pub fn run(args: InputArgs) -> Result<()> {
    let path = super::input_path(&args)?;
    let run = ib2d::load(&path)?;
    print!("{}", render_input2d(&run.config, &run.file.structure_token));
    Ok(())
}
