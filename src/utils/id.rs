use crate::constants::REQUEST_ID_LENGTH;

const ID_ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates the correlation id attached to a request in the logs
///
/// Uppercase letters and digits, [`REQUEST_ID_LENGTH`] characters, produced by `nanoid`.
///
/// # Examples
/// ```
/// use admin_http::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 12);
/// ```
#[must_use]
pub fn request_id() -> String {
    nanoid::nanoid!(REQUEST_ID_LENGTH, &ID_ALPHABET)
}
