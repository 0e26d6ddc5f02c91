use crate::cmd::{Context, InfoArgs};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::print_info;

pub fn run(args: InfoArgs, ctx: &Context) -> CliResult<i32> {
    let mut client = ctx.connect()?;
    let reply = client
        .get_info(args.info_type, args.info_format)
        .map_err(|err| client_error("GetInfo failed", err))?;

    print_info(&reply, ctx.format);
    Ok(SUCCESS)
}
