use curl::easy::Easy;

pub struct HttpUtils;

impl HttpUtils {
    // Plain GET returning the raw body. Every transport failure collapses to
    // None so callers can degrade instead of aborting.
    pub fn get(url: &str) -> Option<Vec<u8>> {
        let mut handle = Easy::new();

        if handle.get(true).is_err() {
            return None;
        }

        if handle.url(url).is_err() {
            return None;
        }

        let mut buffer_response = Vec::new();

        {
            let mut transfer = handle.transfer();

            if transfer
                .write_function(|data| {
                    buffer_response.extend_from_slice(data);
                    Ok(data.len())
                })
                .is_err()
            {
                return None;
            }

            if transfer.perform().is_err() {
                return None;
            }
        }

        Some(buffer_response)
    }
}
