#![no_main]

use article_params::host::{HostCommand, Session};
use article_params::config::PanelLayout;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Each line is a console command; parsing must never panic, and neither
    // may executing whatever parses
    if let Ok(s) = std::str::from_utf8(data) {
        let mut session = Session::new(PanelLayout::default());
        for line in s.lines() {
            if let Ok(command) = line.parse::<HostCommand>() {
                if command == HostCommand::Quit {
                    break;
                }
                let _ = session.execute(command);
            }
        }
    }
});
