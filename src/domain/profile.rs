/// ShareX custom uploader profiles generated on every run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UploadProfile {
    File,
    Image,
    Text,
    Url,
}

impl UploadProfile {
    pub const ALL: [UploadProfile; 4] =
        [UploadProfile::File, UploadProfile::Image, UploadProfile::Text, UploadProfile::Url];

    pub fn name(self) -> &'static str {
        match self {
            UploadProfile::File => "file",
            UploadProfile::Image => "image",
            UploadProfile::Text => "text",
            UploadProfile::Url => "url",
        }
    }

    /// File name shared by the template and the generated output.
    pub fn file_name(self) -> String {
        format!("{}.sxcu", self.name())
    }
}
