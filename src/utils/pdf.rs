//! Leave form document renderer.
//!
//! Produces the fixed-layout A4 form HR prints for an approved request:
//! a personnel block, a leave block, the approval note when present, and
//! the two signature boxes. The built-in PDF fonts only cover the WinAnsi
//! repertoire, so every string is folded through the transliteration table
//! before it is drawn.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon,
    Rgb,
};
use printpdf::path::{PaintMode, WindingOrder};

use super::translit;

/// Display values for one rendered form. Missing directory data arrives as
/// empty strings; the layout does not change.
#[derive(Debug, Default)]
pub struct LeaveFormData {
    pub full_name: String,
    pub registration_no: String,
    pub department: String,
    pub job_title: String,
    pub phone: String,
    pub email: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub approval_note: Option<String>,
}

const MARGIN: f32 = 10.0;
const FULL_W: f32 = 190.0;
const LABEL_W: f32 = 50.0;
const ROW_H: f32 = 8.0;
const WRAP_COLS: usize = 70;

/// Download filename for a request's form, derived from requester name and
/// leave type, transliterated.
pub fn form_filename(full_name: &str, leave_type_label: &str) -> String {
    format!(
        "izin_{}_{}.pdf",
        translit::filename_slug(full_name),
        translit::filename_slug(leave_type_label)
    )
}

pub fn render_leave_form(data: &LeaveFormData) -> anyhow::Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new("Izin Talep Formu", Mm(210.0), Mm(297.0), "form");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut writer = FormWriter {
        layer: doc.get_page(page).get_layer(layer),
        regular,
        bold,
        y: 280.0,
    };
    writer.layer.set_outline_thickness(0.4);
    writer
        .layer
        .set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));

    writer.title("IZIN TALEP FORMU");

    writer.section("PERSONEL BILGILERI");
    writer.field("Ad Soyad", &data.full_name);
    writer.field("Sicil No", &data.registration_no);
    writer.field("Departman", &data.department);
    writer.field("Gorevi", &data.job_title);
    writer.field("Cep Telefonu", &data.phone);
    writer.field("Mail Adresi", &data.email);
    writer.gap();

    writer.section("IZIN BILGILERI");
    writer.field("Izin Turu", &data.leave_type);
    writer.field("Baslangic Tarihi", &data.start_date);
    writer.field("Bitis Tarihi", &data.end_date);
    writer.multiline_field("Izin Nedeni", &data.reason);
    writer.gap();

    if let Some(note) = &data.approval_note {
        writer.section("YONETICI ONAYI");
        writer.note_box(note);
        writer.gap();
    }

    writer.signature_boxes("Personel Imzasi", "Yonetici Imzasi");

    let bytes = doc.save_to_bytes()?;
    Ok(bytes)
}

struct FormWriter {
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl FormWriter {
    fn text(&self, font: &IndirectFontRef, size: f32, x: f32, y: f32, s: &str) {
        self.layer
            .use_text(translit::fold(s), size, Mm(x), Mm(y), font);
    }

    /// Stroked rectangle with `(x, y_top)` as the upper-left corner.
    fn rect(&self, x: f32, y_top: f32, w: f32, h: f32) {
        let points = vec![
            (Point::new(Mm(x), Mm(y_top)), false),
            (Point::new(Mm(x + w), Mm(y_top)), false),
            (Point::new(Mm(x + w), Mm(y_top - h)), false),
            (Point::new(Mm(x), Mm(y_top - h)), false),
        ];
        self.layer.add_line(Line {
            points,
            is_closed: true,
        });
    }

    fn title(&mut self, text: &str) {
        self.text(&self.bold, 18.0, 70.0, self.y, text);
        self.y -= 12.0;
    }

    fn section(&mut self, title: &str) {
        let fill = vec![
            (Point::new(Mm(MARGIN), Mm(self.y)), false),
            (Point::new(Mm(MARGIN + FULL_W), Mm(self.y)), false),
            (Point::new(Mm(MARGIN + FULL_W), Mm(self.y - ROW_H)), false),
            (Point::new(Mm(MARGIN), Mm(self.y - ROW_H)), false),
        ];
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(0.9, 0.9, 0.9, None)));
        self.layer.add_polygon(Polygon {
            rings: vec![fill],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        self.text(&self.bold, 12.0, MARGIN + 2.0, self.y - 5.5, title);
        self.y -= ROW_H;
    }

    fn field(&mut self, label: &str, value: &str) {
        self.rect(MARGIN, self.y, LABEL_W, ROW_H);
        self.rect(MARGIN + LABEL_W, self.y, FULL_W - LABEL_W, ROW_H);
        let label_text = format!("{label}:");
        self.text(&self.regular, 11.0, MARGIN + 2.0, self.y - 5.5, &label_text);
        self.text(
            &self.regular,
            11.0,
            MARGIN + LABEL_W + 2.0,
            self.y - 5.5,
            value,
        );
        self.y -= ROW_H;
    }

    fn multiline_field(&mut self, label: &str, value: &str) {
        let lines = wrap(value, WRAP_COLS);
        let height = ROW_H * lines.len().max(1) as f32;
        self.rect(MARGIN, self.y, LABEL_W, height);
        self.rect(MARGIN + LABEL_W, self.y, FULL_W - LABEL_W, height);
        let label_text = format!("{label}:");
        self.text(&self.regular, 11.0, MARGIN + 2.0, self.y - 5.5, &label_text);
        let mut line_y = self.y - 5.5;
        for line in &lines {
            self.text(&self.regular, 11.0, MARGIN + LABEL_W + 2.0, line_y, line);
            line_y -= ROW_H;
        }
        self.y -= height;
    }

    /// Full-width bordered box holding the approval note verbatim.
    fn note_box(&mut self, note: &str) {
        let lines = wrap(note, 90);
        let height = ROW_H * lines.len().max(1) as f32;
        self.rect(MARGIN, self.y, FULL_W, height);
        let mut line_y = self.y - 5.5;
        for line in &lines {
            self.text(&self.regular, 11.0, MARGIN + 2.0, line_y, line);
            line_y -= ROW_H;
        }
        self.y -= height;
    }

    fn signature_boxes(&mut self, left: &str, right: &str) {
        let half = FULL_W / 2.0;
        self.rect(MARGIN, self.y, half, 10.0);
        self.rect(MARGIN + half, self.y, half, 10.0);
        self.text(&self.bold, 12.0, MARGIN + 28.0, self.y - 6.5, left);
        self.text(&self.bold, 12.0, MARGIN + half + 28.0, self.y - 6.5, right);
        self.y -= 10.0;
    }

    fn gap(&mut self) {
        self.y -= 5.0;
    }
}

fn wrap(text: &str, max_cols: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_cols {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LeaveFormData {
        LeaveFormData {
            full_name: "Ayşe Yılmaz".into(),
            registration_no: "S-1042".into(),
            department: "Bordro".into(),
            job_title: "Uzman".into(),
            phone: "+905551234567".into(),
            email: "ayse@company.com".into(),
            leave_type: "Yıllık İzin".into(),
            start_date: "2025-03-01".into(),
            end_date: "2025-03-05".into(),
            reason: "Yıllık izin kullanımı".into(),
            approval_note: Some("Mehmet Kaya tarafından 2025-03-06 tarihinde onaylandı".into()),
        }
    }

    #[test]
    fn renders_a_pdf_byte_stream() {
        let bytes = render_leave_form(&sample()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn renders_without_approval_block_or_directory_data() {
        let data = LeaveFormData {
            approval_note: None,
            ..Default::default()
        };
        let bytes = render_leave_form(&data).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn filename_is_deterministic_and_ascii() {
        let name = form_filename("Ayşe Yılmaz", "Yıllık İzin");
        assert_eq!(name, "izin_Ayse_Yilmaz_Yillik_Izin.pdf");
        assert!(name.is_ascii());
    }

    #[test]
    fn wrap_respects_the_column_width() {
        let lines = wrap("bir iki uc dort bes alti yedi", 10);
        assert!(lines.iter().all(|l| l.len() <= 10));
        assert_eq!(lines.join(" "), "bir iki uc dort bes alti yedi");
    }
}
