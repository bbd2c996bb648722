//! Static HTML report generation.
//!
//! Renders the annotated dataset as a standalone searchable card grid:
//! one card per record with a color bar, crop name, hex code and image
//! thumbnail, filtered client-side by name. `dominant_color` is treated
//! as an opaque display string; schema stability is the only contract
//! with the extraction core.

use cropcolor_models::AnnotatedRecord;
use serde::Serialize;

use crate::error::WorkerResult;

/// One embedded dataset entry.
#[derive(Debug, Serialize)]
struct ReportEntry<'a> {
    crop_name: &'a str,
    image_url: Option<&'a str>,
    dominant_color: Option<&'a str>,
}

/// Render the report page with the dataset embedded as a JSON array.
pub fn render_report(rows: &[AnnotatedRecord]) -> WorkerResult<String> {
    let entries: Vec<ReportEntry<'_>> = rows
        .iter()
        .map(|row| ReportEntry {
            crop_name: &row.crop_name,
            image_url: row.image_url.as_deref(),
            dominant_color: row.dominant_color.as_deref(),
        })
        .collect();

    let data_json = serde_json::to_string_pretty(&entries)?;
    Ok(TEMPLATE.replace("__CROP_DATA__", &data_json))
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Crop Color Report</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #f5f5f5;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
        }
        h1 {
            text-align: center;
            color: #333;
            margin-bottom: 30px;
        }
        .search-box {
            width: 100%;
            padding: 12px;
            font-size: 16px;
            border: 2px solid #ddd;
            border-radius: 8px;
            margin-bottom: 20px;
            box-sizing: border-box;
        }
        .stats {
            text-align: center;
            margin-bottom: 20px;
            color: #666;
        }
        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
            gap: 20px;
            margin-top: 20px;
        }
        .crop-card {
            background: white;
            border-radius: 12px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            overflow: hidden;
            transition: transform 0.2s ease;
        }
        .crop-card:hover {
            transform: translateY(-2px);
            box-shadow: 0 4px 16px rgba(0,0,0,0.15);
        }
        .color-bar {
            height: 80px;
            display: flex;
            align-items: center;
            justify-content: center;
            font-weight: bold;
            text-shadow: 1px 1px 2px rgba(0,0,0,0.5);
            font-size: 18px;
        }
        .color-bar.missing {
            background: repeating-linear-gradient(45deg, #eee, #eee 10px, #ddd 10px, #ddd 20px);
            color: #888;
            text-shadow: none;
        }
        .crop-info {
            padding: 16px;
        }
        .crop-header {
            display: flex;
            align-items: center;
            gap: 12px;
            margin-bottom: 12px;
        }
        .crop-image {
            width: 40px;
            height: 40px;
            object-fit: contain;
            border-radius: 6px;
            background: #f8f8f8;
            padding: 4px;
        }
        .crop-name {
            font-size: 18px;
            font-weight: 600;
            color: #333;
            flex: 1;
        }
        .color-code {
            font-family: 'Monaco', 'Menlo', monospace;
            font-size: 14px;
            color: #666;
            background: #f8f8f8;
            padding: 4px 8px;
            border-radius: 4px;
            display: inline-block;
            margin-bottom: 8px;
        }
        .image-link {
            font-size: 12px;
            color: #888;
            text-decoration: none;
            word-break: break-all;
            line-height: 1.4;
        }
        .image-link:hover {
            color: #0066cc;
        }
        .no-results {
            text-align: center;
            color: #666;
            font-size: 18px;
            margin-top: 40px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Crop Color Report</h1>

        <input type="text" class="search-box" id="searchInput" placeholder="Search by crop name...">

        <div class="stats" id="stats"></div>

        <div class="grid" id="cropGrid"></div>

        <div class="no-results" id="noResults" style="display: none;">
            No matching records.
        </div>
    </div>

    <script>
        const cropData = __CROP_DATA__;

        function textColorFor(hexColor) {
            const r = parseInt(hexColor.substr(1, 2), 16);
            const g = parseInt(hexColor.substr(3, 2), 16);
            const b = parseInt(hexColor.substr(5, 2), 16);
            const brightness = (r * 299 + g * 587 + b * 114) / 1000;
            return brightness > 128 ? '#000000' : '#ffffff';
        }

        function createCropCard(crop) {
            const colorBar = crop.dominant_color
                ? `<div class="color-bar" style="background-color: ${crop.dominant_color}; color: ${textColorFor(crop.dominant_color)};">${crop.dominant_color}</div>`
                : `<div class="color-bar missing">no color</div>`;
            const thumbnail = crop.image_url
                ? `<img src="${crop.image_url}" alt="${crop.crop_name}" class="crop-image" loading="lazy">`
                : '';
            const link = crop.image_url
                ? `<a href="${crop.image_url}" target="_blank" class="image-link">${crop.image_url}</a>`
                : '';

            return `
                <div class="crop-card">
                    ${colorBar}
                    <div class="crop-info">
                        <div class="crop-header">
                            ${thumbnail}
                            <div class="crop-name">${crop.crop_name}</div>
                        </div>
                        <div class="color-code">${crop.dominant_color || 'n/a'}</div>
                        ${link}
                    </div>
                </div>
            `;
        }

        function renderGrid(data) {
            const grid = document.getElementById('cropGrid');
            const noResults = document.getElementById('noResults');

            if (data.length === 0) {
                grid.style.display = 'none';
                noResults.style.display = 'block';
            } else {
                grid.style.display = 'grid';
                noResults.style.display = 'none';
                grid.innerHTML = data.map(createCropCard).join('');
            }

            const colored = data.filter(crop => crop.dominant_color).length;
            document.getElementById('stats').textContent =
                `${data.length} records, ${colored} with extracted colors`;
        }

        function filterCrops(searchTerm) {
            const filtered = cropData.filter(crop =>
                crop.crop_name.toLowerCase().includes(searchTerm.toLowerCase())
            );
            renderGrid(filtered);
        }

        renderGrid(cropData);

        document.getElementById('searchInput').addEventListener('input', (e) => {
            filterCrops(e.target.value);
        });
    </script>
</body>
</html>
"#;
