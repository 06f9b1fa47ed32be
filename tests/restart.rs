mod error {
    pub use profman::error::*;
}

mod restart_under_test {
    #![allow(dead_code)]

    include!("../src/profile/restart.rs");

    #[test]
    fn restarts_into_start_command() {
        assert_eq!(restart_args(None, false, 0), [OsString::from("start")]);
    }

    #[test]
    fn carries_global_flags() {
        let args = restart_args(Some(Path::new("/tmp/profiles")), true, 2);
        assert_eq!(
            args,
            [
                OsString::from("--root"),
                OsString::from("/tmp/profiles"),
                OsString::from("--json"),
                OsString::from("-vv"),
                OsString::from("start"),
            ]
        );
    }

    #[test]
    fn process_restarter_keeps_program_and_args() {
        let restarter = ProcessRestarter::new("/usr/bin/profman", restart_args(None, true, 0));
        assert_eq!(restarter.program(), Path::new("/usr/bin/profman"));
        assert_eq!(restarter.args().len(), 2);
    }
}
