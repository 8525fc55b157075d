// SPDX-License-Identifier: MPL-2.0
use iced_shell::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        view: args.opt_value_from_str("--view").unwrap_or(None),
        theme: args.opt_value_from_str("--theme").unwrap_or(None),
    };

    app::run(flags)
}
