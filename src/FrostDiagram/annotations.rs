//! Placement of chemical labels next to the points of a Frost curve so that labels of
//! neighbouring oxidation states do not overlap. A label that has to be moved away from its
//! point is drawn with an arrow pointing back at it.
use serde::{Deserialize, Serialize};

/// text box size in data units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub txt_width: f64,
    pub txt_height: f64,
}

/// label with its final position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLabel {
    pub charge: i32,
    pub text: String,
    /// the point the label belongs to
    pub y: f64,
    pub text_x: f64,
    pub text_y: f64,
    /// the label was moved, an arrow leads from the text to the point
    pub arrow: bool,
}

impl LabelLayout {
    pub fn new(txt_width: f64, txt_height: f64) -> Self {
        Self {
            txt_width,
            txt_height,
        }
    }
    /// box size proportional to the vertical extent of the plot
    pub fn from_y_span(span: f64) -> Self {
        Self::new(0.03 * span, 0.04 * span)
    }
    /// vertical text position for every point
    pub fn text_positions(&self, x_data: &[f64], y_data: &[f64]) -> Vec<f64> {
        let h = self.txt_height;
        let w = self.txt_width;
        let mut a: Vec<(f64, f64)> = y_data.iter().copied().zip(x_data.iter().copied()).collect();
        let mut text_positions = y_data.to_vec();

        for index in 0..a.len() {
            let (y, x) = a[index];
            let mut neighbours: Vec<(f64, f64)> = a
                .iter()
                .copied()
                .filter(|&(yi, xi)| yi > y - h && (xi - x).abs() < w * 2.0 && (yi, xi) != (y, x))
                .collect();
            if neighbours.is_empty() {
                continue;
            }
            neighbours.sort_by(|p, q| p.0.total_cmp(&q.0).then(p.1.total_cmp(&q.1)));
            // collision with the lowest neighbour
            if (neighbours[0].0 - y).abs() < h {
                let top = neighbours[neighbours.len() - 1].0 + h;
                a[index] = (top, x);
                text_positions[index] = top;
                // first gap wide enough for one more label
                for k in 0..neighbours.len() - 1 {
                    let gap = neighbours[k + 1].0 - neighbours[k].0;
                    if gap > h * 2.0 {
                        let slot = neighbours[k].0 + h;
                        a[index] = (slot, x);
                        text_positions[index] = slot;
                        break;
                    }
                }
            }
        }
        text_positions
    }
    /// positions labels of a curve; text is shifted right by the box width plus `xmove`
    /// and vertically by `ymove`
    pub fn place(
        &self,
        points: &[(i32, f64)],
        labels: &[String],
        xmove: f64,
        ymove: f64,
    ) -> Vec<PlacedLabel> {
        let x_data: Vec<f64> = points.iter().map(|(charge, _)| *charge as f64).collect();
        let y_data: Vec<f64> = points.iter().map(|(_, y)| *y).collect();
        let positions = self.text_positions(&x_data, &y_data);
        points
            .iter()
            .zip(labels.iter())
            .zip(positions)
            .map(|(((charge, y), text), t)| PlacedLabel {
                charge: *charge,
                text: text.clone(),
                y: *y,
                text_x: *charge as f64 + self.txt_width + xmove,
                text_y: t + ymove,
                arrow: *y != t,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_collision_keeps_positions() {
        let layout = LabelLayout::new(0.5, 0.5);
        let xs = [0.0, 3.0, 6.0];
        let ys = [0.0, 0.1, -0.1];
        assert_eq!(layout.text_positions(&xs, &ys), ys.to_vec());
    }

    #[test]
    fn test_collision_moves_label_up() {
        let layout = LabelLayout::new(1.0, 0.5);
        let xs = [0.0, 1.0];
        let ys = [0.0, 0.25];
        // the first label jumps above its neighbour, the second is then free
        assert_eq!(layout.text_positions(&xs, &ys), vec![0.75, 0.25]);
    }

    #[test]
    fn test_collision_uses_gap() {
        let layout = LabelLayout::new(1.0, 0.5);
        let xs = [0.0, 1.0, 1.0];
        let ys = [0.0, 0.25, 3.0];
        let positions = layout.text_positions(&xs, &ys);
        // neighbours of the first label are 0.25 and 3.0, the gap between them fits a label
        assert_eq!(positions[0], 0.75);
        assert_eq!(positions[2], 3.0);
    }

    #[test]
    fn test_place_labels() {
        let layout = LabelLayout::from_y_span(25.0);
        assert_eq!(layout, LabelLayout::new(0.75, 1.0));
        let points = vec![(0, 0.0), (2, -1.82), (3, -2.22)];
        let labels = vec!["Cr".to_string(), "Cr^{2+}".to_string(), "Cr^{3+}".to_string()];
        let placed = layout.place(&points, &labels, 0.0, -0.05);
        assert_eq!(placed.len(), 3);
        assert_eq!(placed[0].text, "Cr");
        assert_eq!(placed[1].text_x, 2.75);
        // Cr^{2+} sits 0.4 above Cr^{3+}: its label is lifted one box height over Cr^{3+},
        // after which the Cr^{3+} label no longer collides
        assert!(placed[1].arrow);
        assert!(!placed[2].arrow);
        assert!(!placed[0].arrow);
        assert!((placed[1].text_y - (-1.22 - 0.05)).abs() < 1e-12);
        assert!((placed[2].text_y - (-2.22 - 0.05)).abs() < 1e-12);
        assert!((placed[0].text_y - (-0.05)).abs() < 1e-12);
    }
}
