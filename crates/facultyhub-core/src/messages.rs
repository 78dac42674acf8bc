//! Localized user-facing messages.
//!
//! End users read Arabic. Backend messages are shown verbatim when present; the
//! strings here are the fallbacks for each operation.

pub const SESSION_EXPIRED: &str = "انتهت الجلسة، يرجى تسجيل الدخول مرة أخرى";
pub const INCOMPLETE_SELECTION: &str = "يرجى تحديد جميع الحقول";
pub const NO_DATA: &str = "لا توجد بيانات";
pub const TEMPLATE_NAME_REQUIRED: &str = "يرجى إدخال اسم القالب";
pub const UPLOAD_FILE_REQUIRED: &str = "يرجى تحديد الفرقة ورفع الملف";
pub const SUBMISSION_IN_PROGRESS: &str = "جاري تنفيذ الطلب، يرجى الانتظار";

pub const ASSIGNMENT_CREATED: &str = "تم تعيين الدكتور بنجاح";
pub const TEMPLATE_CREATED: &str = "تم إنشاء القالب بنجاح";
pub const TEMPLATE_UPDATED: &str = "تم تحديث القالب بنجاح";
pub const PASSWORD_RESET: &str = "تم إعادة تعيين كلمة المرور بنجاح";

/// Operations that can fail in front of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    LoadDepartments,
    LoadYears,
    LoadLevels,
    LoadSpecializations,
    LoadStudents,
    LoadSubjects,
    LoadFormData,
    LoadTemplates,
    LoadPendingGrades,
    AssignDoctor,
    UploadGrades,
    ApproveGrades,
    SaveTemplate,
    ResetPassword,
    ValidateSession,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::LoadDepartments => "فشل تحميل الأقسام",
            Self::LoadYears => "فشل تحميل السنوات",
            Self::LoadLevels => "فشل تحميل الفرق",
            Self::LoadSpecializations => "فشل تحميل التخصصات",
            Self::LoadStudents => "فشل تحميل الطلاب",
            Self::LoadSubjects => "فشل تحميل المواد",
            Self::LoadFormData => "خطأ في تحميل البيانات",
            Self::LoadTemplates => "فشل في تحميل قوالب التقييم",
            Self::LoadPendingGrades => "فشل تحميل الدرجات المعلقة",
            Self::AssignDoctor => "حدث خطأ",
            Self::UploadGrades => "فشل رفع الدرجات",
            Self::ApproveGrades => "فشل اعتماد الدرجات",
            Self::SaveTemplate => "حدث خطأ أثناء الحفظ",
            Self::ResetPassword => "فشل إعادة تعيين كلمة المرور",
            Self::ValidateSession => SESSION_EXPIRED,
        }
    }
}
