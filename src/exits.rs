//! Exit handling: terminal restore and generator wipe on every way out.

use gerasenha::rand;

/// Put the tty back in cooked mode with echo, whatever state we left it in.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    unsafe {
        if libc::isatty(libc::STDOUT_FILENO) == 1 {
            let seq = b"\x1b[0m\x1b[?25h";
            libc::write(
                libc::STDOUT_FILENO,
                seq.as_ptr() as *const libc::c_void,
                seq.len(),
            );
        }
    }
    rand::zeroize_state();
}

/// SIGINT/SIGTERM/SIGHUP: exit, atexit does the rest.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers, register the atexit cleanup and mark the process
/// non-dumpable so passwords never land in a core file. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
