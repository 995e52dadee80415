use crate::config::ServiceConfig;
use crate::error::GenerationError;
use papermill_assets::{locate, AssetCategory, AssetStore, FilesystemAssetStore};
use papermill_content::{
    DocumentRequest, PageDocumentRequest, PresentationRequest, SpreadsheetRequest,
};
use papermill_deck::{write_pptx, DeckComposer};
use papermill_doc::{write_docx, DocComposer};
use papermill_ooxml::MediaImage;
use papermill_page::{apply_template, write_pdf, PageComposer};
use papermill_sheet::{write_xlsx, SheetComposer};
use papermill_store::{spawn_retention_sweeper, FileStore, GeneratedFile, StoreError};
use papermill_style::{resolve, Palette};
use papermill_types::DocumentKind;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// The service facade: validates a request, resolves its palette and
/// assets, runs the matching composer and persists the result. One call
/// per generated document; no state is shared between calls beyond the
/// read-only asset registry and the file store.
pub struct DocumentService {
    assets: Arc<dyn AssetStore>,
    files: Arc<FileStore>,
}

impl DocumentService {
    /// Filesystem-backed service using the given configuration.
    pub fn new(config: &ServiceConfig) -> std::io::Result<Self> {
        let assets = FilesystemAssetStore::new(&config.assets_dir)?;
        let files = FileStore::new(&config.files_dir, config.retention)?;
        Ok(Self {
            assets: Arc::new(assets),
            files: Arc::new(files),
        })
    }

    /// Service over caller-provided stores. Tests use this with an
    /// in-memory asset store.
    pub fn with_stores(assets: Arc<dyn AssetStore>, files: Arc<FileStore>) -> Self {
        Self { assets, files }
    }

    pub fn assets(&self) -> &dyn AssetStore {
        self.assets.as_ref()
    }

    pub fn create_presentation(
        &self,
        request: &PresentationRequest,
    ) -> Result<GeneratedFile, GenerationError> {
        request.validate()?;
        let palette = self.palette(request.palette.as_deref());
        let logo = self.load_logo(request.logo.as_deref());
        self.note_unapplied_template(DocumentKind::Presentation, request.template.as_deref());

        let deck = DeckComposer::new(palette)
            .with_logo(logo)
            .compose(request, |name| self.load_image(name));
        let bytes = write_pptx(&deck, palette, &request.title, request.author.as_deref())?;
        Ok(self.files.save(DocumentKind::Presentation, &bytes)?)
    }

    pub fn create_document(
        &self,
        request: &DocumentRequest,
    ) -> Result<GeneratedFile, GenerationError> {
        request.validate()?;
        let palette = self.palette(request.palette.as_deref());
        let logo = self.load_logo(request.logo.as_deref());
        self.note_unapplied_template(DocumentKind::Document, request.template.as_deref());

        let model = DocComposer::new().with_logo(logo).compose(request);
        let bytes = write_docx(&model, palette, &request.title, request.author.as_deref())?;
        Ok(self.files.save(DocumentKind::Document, &bytes)?)
    }

    pub fn create_spreadsheet(
        &self,
        request: &SpreadsheetRequest,
    ) -> Result<GeneratedFile, GenerationError> {
        request.validate()?;
        let palette = self.palette(request.palette.as_deref());
        let logo = self.load_logo(request.logo.as_deref());
        self.note_unapplied_template(DocumentKind::Spreadsheet, request.template.as_deref());

        let workbook = SheetComposer::new().with_logo(logo).compose(request);
        let bytes = write_xlsx(&workbook, palette, &request.title)?;
        Ok(self.files.save(DocumentKind::Spreadsheet, &bytes)?)
    }

    pub fn create_page_document(
        &self,
        request: &PageDocumentRequest,
    ) -> Result<GeneratedFile, GenerationError> {
        request.validate()?;
        let palette = self.palette(request.palette.as_deref());
        let logo = self.load_logo(request.logo.as_deref());

        let model = PageComposer::new(palette)
            .with_logo(logo)
            .compose(request, |name| self.load_image(name));
        let mut bytes = write_pdf(&model, &request.title, request.author.as_deref())?;

        // A located PDF template contributes its pages in front of the
        // generated ones. A template that cannot be merged is dropped, not
        // fatal.
        if let Some(template) = request
            .template
            .as_deref()
            .and_then(|name| {
                locate(
                    self.assets.as_ref(),
                    AssetCategory::Template(DocumentKind::PageDocument),
                    name,
                )
            })
        {
            match apply_template(&bytes, &template) {
                Ok(merged) => bytes = merged,
                Err(e) => log::warn!("ignoring unusable pdf template: {e}"),
            }
        }
        Ok(self.files.save(DocumentKind::PageDocument, &bytes)?)
    }

    /// Look up a previously generated file for download.
    pub fn open_file(&self, filename: &str) -> Result<GeneratedFile, StoreError> {
        self.files.open(filename)
    }

    /// All generated files, newest first.
    pub fn list_files(&self) -> Result<Vec<GeneratedFile>, StoreError> {
        self.files.list()
    }

    /// Delete generated files older than the retention window.
    pub fn sweep_expired(&self) -> Result<usize, StoreError> {
        self.files.sweep_expired()
    }

    /// Start the periodic retention sweep on a background thread.
    pub fn start_retention_sweeper(&self, interval: Duration) -> std::io::Result<JoinHandle<()>> {
        spawn_retention_sweeper(Arc::clone(&self.files), interval)
    }

    fn palette(&self, name: Option<&str>) -> &'static Palette {
        resolve(name.unwrap_or_default())
    }

    fn load_logo(&self, name: Option<&str>) -> Option<MediaImage> {
        let name = name?;
        let data = locate(self.assets.as_ref(), AssetCategory::Logo, name)?;
        let sniffed = MediaImage::sniff(data);
        if sniffed.is_none() {
            log::warn!("logo {name:?} is not a usable image, skipping");
        }
        sniffed
    }

    fn load_image(&self, name: &str) -> Option<MediaImage> {
        let data = locate(self.assets.as_ref(), AssetCategory::Image, name)?;
        let sniffed = MediaImage::sniff(data);
        if sniffed.is_none() {
            log::warn!("image {name:?} is not a usable image, skipping");
        }
        sniffed
    }

    /// Templates are only merged into PDF output. For the OOXML kinds a
    /// named template is acknowledged and left unapplied.
    fn note_unapplied_template(&self, kind: DocumentKind, name: Option<&str>) {
        let Some(name) = name else { return };
        if locate(self.assets.as_ref(), AssetCategory::Template(kind), name).is_some() {
            log::warn!(
                "template {name:?} found but {} templates are not applied",
                kind.extension()
            );
        }
    }
}
