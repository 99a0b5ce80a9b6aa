//! Guard for the general settings screen.

use crate::types::{PatchSet, Replacement};

pub const NAME: &str = "ConfiguracoesGerais.tsx";
pub const RELATIVE_PATH: &str = "src/features/settings/ConfiguracoesGerais.tsx";

pub const OLD_IMPORTS: &str =
    "import { Settings, Plug, Users, Bell, Server, TestTube } from 'lucide-react';";

pub const NEW_IMPORTS: &str = r#"import { Settings, Plug, Users, Bell, Server, TestTube, ShieldAlert } from 'lucide-react';
import { useRBAC } from '@/hooks/useRBAC';
import { Alert, AlertDescription } from '@/components/ui/alert';"#;

pub const OLD_VIEW_GUARD: &str = r#"const ConfiguracoesGerais = () => {
  // 🔓 ACESSO TOTAL: Qualquer usuário autenticado pode acessar configurações
  return ("#;

pub const NEW_VIEW_GUARD: &str = r#"const ConfiguracoesGerais = () => {
  // ✅ RBAC: Verificação de permissões
  const { can, canManageConfig, userRole } = useRBAC();

  // Se não pode acessar configurações, mostrar mensagem
  if (!can('configuracoes', 'read')) {
    return (
      <div className="p-6">
        <Alert variant="destructive">
          <ShieldAlert className="h-4 w-4" />
          <AlertDescription>
            Você não tem permissão para acessar as configurações.
            <br />
            <span className="text-sm text-gray-500">Role atual: {userRole}</span>
          </AlertDescription>
        </Alert>
      </div>
    );
  }

  return ("#;

pub fn patch_set() -> PatchSet {
    PatchSet {
        name: NAME,
        relative_path: RELATIVE_PATH,
        replacements: vec![
            Replacement {
                label: "imports",
                search: OLD_IMPORTS,
                replace: NEW_IMPORTS,
            },
            Replacement {
                label: "view-guard",
                search: OLD_VIEW_GUARD,
                replace: NEW_VIEW_GUARD,
            },
        ],
    }
}
