/// Port for producing opaque random strings used as default secrets.
pub trait SecretGenerator {
    /// Each call returns an independent value.
    fn generate_secret(&self) -> String;
}
