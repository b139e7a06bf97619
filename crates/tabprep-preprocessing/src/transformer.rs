use tabprep_core::PrepResult;

/// Two-phase transformer: learn statistics from training data with `fit`,
/// then apply them with `transform`.
///
/// `transform` is only valid after `fit`; implementations return
/// [`tabprep_core::PrepError::NotFitted`] otherwise. The `norm` flag gates
/// the normalization step; encoding steps always apply.
pub trait Transformer {
    type Data;

    fn fit(&mut self, data: &Self::Data) -> PrepResult<()>;

    fn transform(&self, data: &Self::Data, norm: bool) -> PrepResult<Self::Data>;

    fn fit_transform(&mut self, data: &Self::Data, norm: bool) -> PrepResult<Self::Data> {
        self.fit(data)?;
        self.transform(data, norm)
    }
}
