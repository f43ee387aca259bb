// Resume extraction prompt. `{resume_text}` is substituted at call time.

pub const RESUME_EXTRACT_PROMPT: &str = r#"Extract structured information from the resume below and return it as one JSON object.
Use double quotes for all keys and string values.

Extract ALL of these fields. Use 0 for missing numbers, "" for missing text and [] for missing lists.

IDENTITY:
- name: string (full name)
- email: string
- phone: string
- address: string
- summary: string (professional summary)

EDUCATION:
- ug_institute_name: string (undergraduate institution, full name)
- ug_institute_code: string (its abbreviation or code, if mentioned)
- pg_institute_name: string (postgraduate institution, "None" if not applicable)
- pg_institute_code: string ("None" if not applicable)
- phd_institute_name: string (PhD institution, "None" if not applicable)
- phd_institute_code: string ("None" if not applicable)
- ug_institute: number (1 if IIT/NIT/IIIT or another tier-1 institution, else 0)
- pg_institute: number (1 if tier-1, else 0)
- phd_institute: number (1 if tier-1, else 0)

EXPERIENCE:
- longevity_years: number (average tenure per job in years: total years / number of jobs)
- average_experience: number (total professional experience in years)
- number_of_unique_designations: number (count of distinct job titles held)

PROFESSIONAL DEVELOPMENT:
- workshops: number
- trainings: number
- workshops_list: array of strings
- trainings_list: array of strings

RESEARCH AND PUBLICATIONS:
- total_papers: number
- total_patents: number
- books: number (authored or co-authored)
- research_papers_list: array of strings
- patents_list: array of strings
- books_list: array of strings

ACHIEVEMENTS:
- achievements: number (awards and achievements)
- achievements_list: array of strings

LOCATION:
- state_jk: number (1 if the resume mentions Jammu, Kashmir, Srinagar or J&K, else 0)

SKILLS AND PROJECTS:
- skills: array of strings
- skills_count: number
- projects: array of strings
- projects_count: number

ADDITIONAL:
- best_fit_for: string (one or two suitable job roles)

All counts are whole numbers. All 0/1 fields are exactly 0 or 1.

RESUME TEXT:
{resume_text}"#;
