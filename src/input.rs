use std::io;
use std::os::unix::io::RawFd;
use std::time::Duration;

/// Read one logical input event: a blocking read of the first byte, then
/// any bytes that keep arriving within `coalesce` of each other. Terminals
/// send multi-byte keys (arrows, function keys) as a burst of bytes with no
/// framing, so an idle window is the only way to group them.
///
/// Returns an empty vec if the stream is already closed; if it closes
/// mid-coalesce, returns the bytes accumulated so far.
pub fn read_event(fd: RawFd, coalesce: Duration) -> io::Result<Vec<u8>> {
    let mut buf = [0u8; 1024];

    let n = read_bytes(fd, &mut buf[..1])?;
    if n == 0 {
        return Ok(Vec::new());
    }
    let mut data = buf[..n].to_vec();

    while wait_readable(fd, coalesce)? {
        let n = read_bytes(fd, &mut buf)?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }

    Ok(data)
}

/// read(2) with EINTR retry. Returns the byte count, 0 on closed stream.
fn read_bytes(fd: RawFd, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        let n = unsafe { libc::read(fd, buf.as_mut_ptr() as *mut libc::c_void, buf.len()) };
        if n >= 0 {
            return Ok(n as usize);
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(err);
        }
    }
}

/// poll(2) on `fd` until it is readable or `timeout` lapses. A zero
/// timeout still reports data that is already buffered.
fn wait_readable(fd: RawFd, timeout: Duration) -> io::Result<bool> {
    let mut pollfd = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    let timeout_ms = timeout.as_millis().min(libc::c_int::MAX as u128) as libc::c_int;
    loop {
        let n = unsafe { libc::poll(&mut pollfd, 1, timeout_ms) };
        if n >= 0 {
            return Ok(n > 0);
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    struct Pipe {
        read_fd: RawFd,
        write_fd: RawFd,
    }

    impl Pipe {
        fn new() -> Pipe {
            let mut fds = [0 as libc::c_int; 2];
            assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);
            Pipe { read_fd: fds[0], write_fd: fds[1] }
        }

        fn write(&self, data: &[u8]) {
            let n = unsafe {
                libc::write(self.write_fd, data.as_ptr() as *const libc::c_void, data.len())
            };
            assert_eq!(n, data.len() as libc::ssize_t);
        }

        fn close_write(&mut self) {
            unsafe { libc::close(self.write_fd) };
            self.write_fd = -1;
        }
    }

    impl Drop for Pipe {
        fn drop(&mut self) {
            unsafe {
                libc::close(self.read_fd);
                if self.write_fd >= 0 {
                    libc::close(self.write_fd);
                }
            }
        }
    }

    #[test]
    fn test_coalesces_bytes_within_window() {
        let pipe = Pipe::new();
        let write_fd = pipe.write_fd;
        let writer = thread::spawn(move || {
            for &b in b"\x1b[A" {
                unsafe {
                    libc::write(write_fd, [b].as_ptr() as *const libc::c_void, 1);
                }
                thread::sleep(Duration::from_millis(5));
            }
        });
        let data = read_event(pipe.read_fd, Duration::from_millis(200)).unwrap();
        writer.join().unwrap();
        assert_eq!(data, b"\x1b[A");
    }

    #[test]
    fn test_splits_on_idle_gap() {
        let pipe = Pipe::new();
        let write_fd = pipe.write_fd;
        let writer = thread::spawn(move || {
            unsafe {
                libc::write(write_fd, b"\x1b".as_ptr() as *const libc::c_void, 1);
            }
            thread::sleep(Duration::from_millis(150));
            unsafe {
                libc::write(write_fd, b"[A".as_ptr() as *const libc::c_void, 2);
            }
        });
        let first = read_event(pipe.read_fd, Duration::from_millis(20)).unwrap();
        assert_eq!(first, b"\x1b");
        let second = read_event(pipe.read_fd, Duration::from_millis(20)).unwrap();
        writer.join().unwrap();
        assert_eq!(second, b"[A");
    }

    #[test]
    fn test_partial_event_on_close_then_empty() {
        let mut pipe = Pipe::new();
        pipe.write(b"\x1b");
        pipe.close_write();
        let data = read_event(pipe.read_fd, Duration::from_millis(50)).unwrap();
        assert_eq!(data, b"\x1b");
        let next = read_event(pipe.read_fd, Duration::from_millis(50)).unwrap();
        assert!(next.is_empty());
    }

    #[test]
    fn test_zero_window_drains_buffered_bytes() {
        let pipe = Pipe::new();
        pipe.write(b"abc");
        let data = read_event(pipe.read_fd, Duration::ZERO).unwrap();
        assert_eq!(data, b"abc");
    }
}
