/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            Ok(actual) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Err`; actual=Ok({:?})", actual);

                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps an `Ok`, panicking with the error's display output otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Ok(v) => v,
            Err(err) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Ok`; actual=Err({})", err);

                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?

                panic!("{}", msg);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn unwraps_ok() {
        let res: Result<u8, String> = Ok(3);
        assert_eq!(assert_ok!(res), 3);
    }

    #[test]
    fn unwraps_err() {
        let res: Result<u8, String> = Err("boom".to_string());
        assert_eq!(assert_err!(res), "boom");
    }

    #[test]
    #[should_panic(expected = "expected `Err`; actual=Ok(1), while loading")]
    fn err_message_includes_context() {
        let res: Result<u8, String> = Ok(1);
        assert_err!(res, "while {}", "loading");
    }
}
