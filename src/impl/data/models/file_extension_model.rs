/// Lowercased extension of a file name: the text after its final dot.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FileExtensionModel(String);

impl FileExtensionModel {
    pub(crate) fn of(file_name: &str) -> Option<Self> {
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| FileExtensionModel(ext.to_lowercase()))
    }

    pub(crate) fn is_one_of<S: AsRef<str>>(&self, accepted: &[S]) -> bool {
        accepted.iter().any(|a| a.as_ref().eq_ignore_ascii_case(&self.0))
    }
}
