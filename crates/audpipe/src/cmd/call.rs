use audpipe_client::Status;

use crate::cmd::{CallArgs, Context};
use crate::exit::{client_error, CliResult, COMMAND_FAILED, SUCCESS};
use crate::output::print_reply;

pub fn run(args: CallArgs, ctx: &Context) -> CliResult<i32> {
    let mut client = ctx.connect()?;
    let reply = client
        .call(&args.command)
        .map_err(|err| client_error("call failed", err))?;

    print_reply(&args.command, &reply, ctx.format);

    match reply.status {
        Status::Success => Ok(SUCCESS),
        _ => Ok(COMMAND_FAILED),
    }
}
