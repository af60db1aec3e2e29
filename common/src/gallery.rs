//! ライトボックス付きギャラリー
//!
//! 画像列はページ読み込み時に固定。開いている間だけ前後移動とEscapeが効く。

use crate::editor::DialogState;

/// altがないときの代替テキスト
pub const FALLBACK_ALT: &str = "Photo";

/// ギャラリーの画像1枚
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: Option<String>,
}

impl GalleryImage {
    pub fn new(src: impl Into<String>, alt: Option<&str>) -> Self {
        Self {
            src: src.into(),
            alt: alt.map(str::to_string),
        }
    }

    /// 空文字のaltも未設定として扱う
    pub fn alt_text(&self) -> &str {
        match self.alt.as_deref() {
            Some(alt) if !alt.is_empty() => alt,
            _ => FALLBACK_ALT,
        }
    }
}

/// ライトボックスの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    images: Vec<GalleryImage>,
    state: DialogState,
    cursor: usize,
}

impl Lightbox {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images,
            state: DialogState::Closed,
            cursor: 0,
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 表示中の画像（閉じていればNone）
    pub fn current(&self) -> Option<&GalleryImage> {
        if self.is_open() {
            self.images.get(self.cursor)
        } else {
            None
        }
    }

    /// サムネイルのクリック。範囲外なら開かない
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.cursor = index;
        self.state = DialogState::Open;
        true
    }

    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, dir: isize) {
        let total = self.images.len();
        if !self.is_open() || total == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + dir).rem_euclid(total as isize) as usize;
    }

    /// キー入力。状態が変わったらtrue
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            "Escape" => self.close(),
            "ArrowRight" => self.next(),
            "ArrowLeft" => self.prev(),
            _ => return false,
        }
        true
    }
}
